//! Clipboard delivery with a terminal escape-sequence fallback.

use std::{
    env,
    io::{self, IsTerminal, Write},
    process::{Command, ExitStatus, Stdio},
    sync::{Mutex, PoisonError},
};

use base64::{Engine as _, engine::general_purpose::STANDARD};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("{0} is not available")]
    Unavailable(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    Status { program: String, status: ExitStatus },

    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    #[error("clipboard copy failed ({primary}), fallback failed ({fallback})")]
    Exhausted {
        primary: Box<ClipboardError>,
        fallback: Box<ClipboardError>,
    },
}

pub trait ClipboardBackend {
    fn name(&self) -> &str;

    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMethod {
    Primary,
    Fallback,
}

/// Copy `text` with `primary`, retrying once with `fallback`.
///
/// Fails only when both backends fail; the error carries both causes.
pub fn copy_to_clipboard(
    primary: &dyn ClipboardBackend,
    fallback: &dyn ClipboardBackend,
    text: &str,
) -> Result<CopyMethod, ClipboardError> {
    let primary_err = match primary.copy(text) {
        Ok(()) => return Ok(CopyMethod::Primary),
        Err(err) => err,
    };

    tracing::warn!(
        backend = primary.name(),
        err = %primary_err,
        fallback = fallback.name(),
        "clipboard copy failed, trying fallback"
    );

    match fallback.copy(text) {
        Ok(()) => Ok(CopyMethod::Fallback),
        Err(fallback_err) => {
            tracing::error!(backend = fallback.name(), err = %fallback_err, "clipboard fallback failed");

            Err(ClipboardError::Exhausted {
                primary: Box::new(primary_err),
                fallback: Box::new(fallback_err),
            })
        }
    }
}

/// Platform clipboard command (`pbcopy`, `wl-copy`, `xclip`, `xsel`, `clip`).
///
/// Candidates are tried in order; a program that is not installed moves on
/// to the next one.
#[derive(Clone, Debug)]
pub struct SystemClipboard {
    commands: Vec<(String, Vec<String>)>,
}

impl SystemClipboard {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            commands: vec![(program.into(), args.into_iter().map(Into::into).collect())],
        }
    }

    pub fn or(mut self, program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.commands
            .push((program.into(), args.into_iter().map(Into::into).collect()));
        self
    }

    /// Pick the clipboard commands for the current platform and session.
    pub fn detect() -> Self {
        let mut commands: Vec<(&str, Vec<&str>)> = Vec::new();

        if cfg!(target_os = "macos") {
            commands.push(("pbcopy", vec![]));
        } else if cfg!(target_os = "windows") {
            commands.push(("clip", vec![]));
        } else {
            if env::var_os("WAYLAND_DISPLAY").is_some() {
                commands.push(("wl-copy", vec![]));
            }
            if env::var_os("DISPLAY").is_some() {
                commands.push(("xclip", vec!["-selection", "clipboard"]));
                commands.push(("xsel", vec!["--clipboard", "--input"]));
            }
        }

        Self {
            commands: commands
                .into_iter()
                .map(|(program, args)| {
                    (
                        program.to_owned(),
                        args.into_iter().map(str::to_owned).collect(),
                    )
                })
                .collect(),
        }
    }

    fn run(program: &str, args: &[String], text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => ClipboardError::Unavailable(program.to_owned()),
                _ => ClipboardError::Spawn {
                    program: program.to_owned(),
                    source,
                },
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::Status {
                program: program.to_owned(),
                status,
            });
        }

        Ok(())
    }
}

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &str {
        self.commands
            .first()
            .map(|(program, _)| program.as_str())
            .unwrap_or("system clipboard")
    }

    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut missing = Vec::new();

        for (program, args) in &self.commands {
            match Self::run(program, args, text) {
                Err(ClipboardError::Unavailable(program)) => {
                    tracing::debug!(%program, "clipboard command not installed");
                    missing.push(program);
                }
                result => return result,
            }
        }

        if missing.is_empty() {
            return Err(ClipboardError::Unavailable(self.name().to_owned()));
        }

        Err(ClipboardError::Unavailable(missing.join(", ")))
    }
}

/// Copies through the terminal with an OSC 52 escape sequence.
pub struct Osc52Clipboard<W: Write + Send> {
    out: Mutex<W>,
    require_terminal: bool,
}

impl Osc52Clipboard<io::Stderr> {
    /// Writes to stderr, only when it is attached to a terminal.
    pub fn terminal() -> Self {
        Self {
            out: Mutex::new(io::stderr()),
            require_terminal: true,
        }
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            require_terminal: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> ClipboardBackend for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if self.require_terminal && !io::stderr().is_terminal() {
            return Err(ClipboardError::Unavailable("terminal".to_owned()));
        }

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        write!(out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        out.flush()?;

        Ok(())
    }
}
