use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Could not read session cookie from {}: {source}", path.display())]
    CredentialRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Session cookie file {} is empty", path.display())]
    EmptyCredential { path: PathBuf },

    #[error("Unknown account \"{label}\" (not listed under [accounts] in config)")]
    UnknownAccount { label: String },

    #[error("Session cookie of account \"{label}\" is empty")]
    EmptyAccount { label: String },

    #[error("Invalid year {year}: December {day} is not a valid date")]
    InvalidYear { year: i32, day: u32 },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Could not create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not get puzzle input with url \"{url}\" (HTTP {status})")]
    Status { url: String, status: u16 },

    #[error("Could not get puzzle input with url \"{url}\": {message}")]
    Transport { url: String, message: String },

    #[error("Could not read response body from \"{url}\": {message}")]
    Body { url: String, message: String },

    #[error("Could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AppError {
    /// Server-side and network failures are worth another attempt; client errors are not
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            AppError::Transport { .. } | AppError::Body { .. } => true,
            AppError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
