use clap::Parser;
use loyalty_quiz::{ContactLauncher, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Show the contact URL instead of opening a browser
    #[arg(long)]
    no_browser: bool,

    /// Print the final session summary as JSON after quitting
    #[arg(long)]
    summary: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let launcher = if args.no_browser {
        ContactLauncher::PrintOnly
    } else {
        ContactLauncher::Browser
    };

    let summary = match Quiz::new(launcher).run() {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error running quiz: {}", e);
            std::process::exit(1);
        }
    };

    if args.summary {
        match summary.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error printing summary: {}", e);
                std::process::exit(1);
            }
        }
    }
}
