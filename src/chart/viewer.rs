//! Opening the saved chart in the platform image viewer

use crate::error::{AppError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Check whether an interactive display is reachable
pub fn display_available() -> bool {
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    {
        true
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .any(|var| std::env::var_os(var).map_or(false, |v| !v.is_empty()))
    }
}

/// Command that opens `path` with the default viewer
pub fn viewer_command(path: &Path) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    }
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Launch the viewer without waiting for it to exit
pub fn open_in_viewer(path: &Path) -> Result<()> {
    viewer_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| AppError::io(format!("Failed to launch image viewer for {}: {}", path.display(), e)))
}
