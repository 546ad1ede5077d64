use std::{io, process::Command};

use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ShareChannel {
    Message,
    Mail,
    Clipboard,
}

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    Status {
        program: &'static str,
        status: std::process::ExitStatus,
    },
}

/// Link that opens a messaging app with `text` prefilled.
pub fn message_share_url(text: &str) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(text))
}

/// `mailto:` link with subject and body prefilled.
pub fn mail_share_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Hand `url` to the platform's default handler.
pub fn open_share_target(url: &str) -> Result<(), ShareError> {
    let (program, args) = opener();

    let status = Command::new(program)
        .args(args)
        .arg(url)
        .status()
        .map_err(|source| ShareError::Launch { program, source })?;

    if !status.success() {
        return Err(ShareError::Status { program, status });
    }

    tracing::info!(program, "opened share target");

    Ok(())
}

#[cfg(target_os = "macos")]
fn opener() -> (&'static str, &'static [&'static str]) {
    ("open", &[])
}

#[cfg(target_os = "windows")]
fn opener() -> (&'static str, &'static [&'static str]) {
    ("cmd", &["/C", "start", ""])
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener() -> (&'static str, &'static [&'static str]) {
    ("xdg-open", &[])
}
