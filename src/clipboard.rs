/*!
 * Clipboard support for aipt
 *
 * Copies the finished document by piping it into whichever clipboard
 * command the platform provides.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use log::{debug, warn};
use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Trait for clipboard operations
pub trait Clipboard {
    /// Copy text to the clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}

/// Available clipboard providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardProvider {
    /// tmux paste buffer, also forwarded to the system clipboard
    Tmux,
    /// X11 clipboard with xclip
    Xclip,
    /// X11 clipboard with xsel
    Xsel,
    /// Wayland clipboard
    Wayland,
    /// macOS clipboard
    MacOS,
    /// Windows clipboard (native or via WSL)
    Windows,
    /// Termux clipboard
    Termux,
}

impl ClipboardProvider {
    fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Self::Xsel => ("xsel", &["-b", "-i"]),
            Self::Wayland => ("wl-copy", &[]),
            Self::MacOS => ("pbcopy", &[]),
            Self::Windows => ("clip.exe", &[]),
            Self::Termux => ("termux-clipboard-set", &[]),
        }
    }
}

impl Clipboard for ClipboardProvider {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let (cmd, args) = self.command();
        execute_clipboard_command(cmd, args, text)
    }
}

//--------------------------------------------------------------------
// Public API
//--------------------------------------------------------------------

/// Copy text to the clipboard using the first available provider
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = determine_clipboard_providers()
        .into_iter()
        .next()
        .ok_or(ClipboardError::NoClipboardFound)?;

    debug!("Copying {} bytes with {:?}", text.len(), provider);
    provider.copy_to_clipboard(text)
}

/// Copy text and tell the user how it went
///
/// Clipboard failures are never fatal: the document has already been
/// printed, so this only reports and returns whether the copy worked.
pub fn copy_with_feedback(text: &str) -> bool {
    match copy_to_clipboard(text) {
        Ok(()) => {
            eprintln!("✅ Output copied to clipboard!");
            true
        }
        Err(e) => {
            warn!("Clipboard copy failed: {}", e);
            eprintln!("⚠️  Could not copy to clipboard: {}", e);
            eprintln!("Output has been printed above. You can copy it manually.");
            false
        }
    }
}

/// Check if a command exists in any `PATH` directory
pub fn command_exists(command: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(command).is_file()))
        .unwrap_or(false)
}

//--------------------------------------------------------------------
// Internal Implementation
//--------------------------------------------------------------------

/// Spawn `cmd`, write `text` to its stdin and wait for it to exit
fn execute_clipboard_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("Failed to spawn {}: {}", cmd, e)))?;

    {
        let stdin = child.stdin.as_mut().ok_or_else(|| {
            ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
        })?;
        stdin.write_all(text.as_bytes())?;
    }
    // Close stdin so the command sees EOF
    drop(child.stdin.take());

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

static PLATFORM: OnceLock<&'static str> = OnceLock::new();

/// Determine the platform (cached)
fn get_platform() -> &'static str {
    PLATFORM.get_or_init(|| {
        if cfg!(target_os = "macos") {
            "macos"
        } else if cfg!(target_os = "windows") {
            "windows"
        } else if cfg!(target_os = "android") {
            "android"
        } else if cfg!(target_os = "linux") {
            if env::var("WSL_DISTRO_NAME").is_ok() {
                "wsl"
            } else {
                "linux"
            }
        } else {
            "unknown"
        }
    })
}

/// Providers to try, most preferred first
fn determine_clipboard_providers() -> Vec<ClipboardProvider> {
    let mut providers = Vec::with_capacity(3);

    // Inside tmux the buffer is the clipboard the user expects
    if env::var_os("TMUX").is_some() && command_exists("tmux") {
        providers.push(ClipboardProvider::Tmux);
    }

    let candidates: &[ClipboardProvider] = match get_platform() {
        "macos" => &[ClipboardProvider::MacOS],
        "windows" | "wsl" => &[ClipboardProvider::Windows],
        "android" => &[ClipboardProvider::Termux],
        "linux" => {
            if env::var_os("WAYLAND_DISPLAY").is_some() {
                &[
                    ClipboardProvider::Wayland,
                    ClipboardProvider::Xsel,
                    ClipboardProvider::Xclip,
                ]
            } else {
                &[
                    ClipboardProvider::Xsel,
                    ClipboardProvider::Xclip,
                    ClipboardProvider::Wayland,
                ]
            }
        }
        _ => &[],
    };

    providers.extend(
        candidates
            .iter()
            .copied()
            .filter(|provider| command_exists(provider.command().0)),
    );
    providers
}
