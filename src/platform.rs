// SPDX-License-Identifier: MPL-2.0
//! Host platform collaborators: platform naming and URI launching.

use crate::error::DispatchError;
use std::process::Command;
use std::sync::Arc;

/// Human-readable name of the platform the app runs on.
#[must_use]
pub fn platform_name() -> String {
    let os = match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        other => other,
    };
    format!("{os} Desktop")
}

/// Opens a URI in whatever application the platform associates with it.
pub trait UriOpener: Send + Sync {
    fn open_uri(&self, uri: &str) -> Result<(), DispatchError>;
}

/// Delegates to the operating system's URI handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUriOpener;

impl UriOpener for SystemUriOpener {
    fn open_uri(&self, uri: &str) -> Result<(), DispatchError> {
        let status = launcher_command(uri)
            .status()
            .map_err(|e| DispatchError::Launch(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(DispatchError::ExitStatus(status.code()))
        }
    }
}

#[cfg(target_os = "macos")]
fn launcher_command(uri: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(uri);
    command
}

// `cmd /C start` would split the query string on `&`.
#[cfg(target_os = "windows")]
fn launcher_command(uri: &str) -> Command {
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler").arg(uri);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher_command(uri: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(uri);
    command
}

/// Runs the opener on the blocking pool so a slow launcher cannot stall the
/// UI thread.
pub async fn dispatch(opener: Arc<dyn UriOpener>, uri: String) -> Result<(), DispatchError> {
    tokio::task::spawn_blocking(move || opener.open_uri(&uri))
        .await
        .map_err(|e| DispatchError::Interrupted(e.to_string()))?
}
