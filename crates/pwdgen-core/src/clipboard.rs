//! Clipboard delivery.
//!
//! The core hands plaintext only to a [`ClipboardTransport`]; it is never
//! printed or logged. The stock transport pipes the secret to a platform
//! clipboard program over stdin.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use secrecy::{ExposeSecret, SecretString};

use crate::error::{PwdgenError, Result};

/// Capability to place a secret on the system clipboard.
pub trait ClipboardTransport {
    fn copy(&self, secret: &SecretString) -> Result<()>;
}

impl<T: ClipboardTransport + ?Sized> ClipboardTransport for &T {
    fn copy(&self, secret: &SecretString) -> Result<()> {
        (**self).copy(secret)
    }
}

impl<T: ClipboardTransport + ?Sized> ClipboardTransport for Box<T> {
    fn copy(&self, secret: &SecretString) -> Result<()> {
        (**self).copy(secret)
    }
}

/// Pipes the secret to an external program's stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from an argv-style list such as `["wl-copy", "--paste-once"]`.
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            PwdgenError::InvalidInput("clipboard command must not be empty".to_string())
        })?;
        if program.trim().is_empty() {
            return Err(PwdgenError::InvalidInput(
                "clipboard program must not be blank".to_string(),
            ));
        }
        Ok(Self::new(program.clone(), args.to_vec()))
    }

    /// Pick the clipboard program for the current platform.
    #[cfg(target_os = "macos")]
    pub fn detect() -> Result<Self> {
        Ok(Self::new("pbcopy", Vec::new()))
    }

    /// Pick the clipboard program for the current platform.
    #[cfg(windows)]
    pub fn detect() -> Result<Self> {
        Ok(Self::new("clip", Vec::new()))
    }

    /// Pick the clipboard program for the current platform.
    ///
    /// Linux has no single clipboard; the display server named by
    /// `XDG_SESSION_TYPE` decides.
    #[cfg(not(any(target_os = "macos", windows)))]
    pub fn detect() -> Result<Self> {
        let session = std::env::var("XDG_SESSION_TYPE").ok();
        Self::for_session_type(session.as_deref())
    }

    /// Clipboard program for a Linux session type.
    pub fn for_session_type(session: Option<&str>) -> Result<Self> {
        match session.map(str::trim) {
            Some("wayland") => Ok(Self::new("wl-copy", vec!["--paste-once".to_string()])),
            Some("x11") => Ok(Self::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()],
            )),
            Some(other) => Err(PwdgenError::Clipboard(format!(
                "XDG_SESSION_TYPE is invalid ({:?}); needs to be wayland or x11",
                other
            ))),
            None => Err(PwdgenError::Clipboard(
                "XDG_SESSION_TYPE is not set".to_string(),
            )),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ClipboardTransport for CommandClipboard {
    fn copy(&self, secret: &SecretString) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    PwdgenError::Clipboard(format!(
                        "{} needs to be installed to copy to the clipboard",
                        self.program
                    ))
                } else {
                    PwdgenError::Clipboard(format!("Failed to start {}: {}", self.program, e))
                }
            })?;

        // Dropping stdin closes the pipe so the program sees EOF.
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(secret.expose_secret().as_bytes()),
            None => Err(std::io::Error::new(
                ErrorKind::BrokenPipe,
                "stdin was not captured",
            )),
        };

        let status = child
            .wait()
            .map_err(|e| PwdgenError::Clipboard(format!("{} did not finish: {}", self.program, e)))?;

        write_result.map_err(|e| {
            PwdgenError::Clipboard(format!("Failed to write to {}: {}", self.program, e))
        })?;

        if !status.success() {
            return Err(PwdgenError::Clipboard(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        tracing::debug!(program = %self.program, "delivered secret to clipboard");
        Ok(())
    }
}
