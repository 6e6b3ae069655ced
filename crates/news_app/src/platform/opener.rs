use std::process::{Command, Stdio};

use news_logging::{news_info, news_warn};

/// Hands a URL to whatever handles it on this machine.
pub(crate) trait UrlOpener: Send {
    /// Returns false when no handler accepted the URL.
    fn open(&self, url: &str) -> bool;
}

/// Launches the platform's default URL handler.
pub(crate) struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> bool {
        let status = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => {
                news_info!("Opened {}", url);
                true
            }
            Ok(status) => {
                news_warn!("No handler accepted {} ({})", url, status);
                false
            }
            Err(err) => {
                news_warn!("Could not launch a URL handler for {}: {}", url, err);
                false
            }
        }
    }
}
