//! The call-to-action: opening the contact page outside the quiz.

use std::io;
use std::process::{Command, Stdio};

use log::{info, warn};

pub const CONTACT_URL: &str = "https://highdef.studio/contact/";

/// How the contact page is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactLauncher {
    /// Hand the URL to the platform's default browser.
    #[default]
    Browser,
    /// Only report the URL.
    PrintOnly,
}

impl ContactLauncher {
    /// Fire and forget. Returns the notice to show the user.
    pub fn launch(self) -> String {
        match self {
            ContactLauncher::Browser => match spawn_opener(CONTACT_URL) {
                Ok(()) => {
                    info!("opened {} in browser", CONTACT_URL);
                    format!("Opened {} in your browser", CONTACT_URL)
                }
                Err(err) => {
                    warn!("failed to open {}: {}", CONTACT_URL, err);
                    format!("Couldn't open a browser. Visit {}", CONTACT_URL)
                }
            },
            ContactLauncher::PrintOnly => format!("Visit {}", CONTACT_URL),
        }
    }
}

fn spawn_opener(url: &str) -> io::Result<()> {
    opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
