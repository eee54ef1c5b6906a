//! Session credential resolution
//!
//! The credential is either the first line of a cookie file or a token stored
//! under a label in the config `[accounts]` table.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{APP_DIR, SESSION_FILE_NAME};
use crate::error::AppError;

/// Opaque session token, read once and never modified
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Credential(String);

impl Credential {
    pub(crate) fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::CredentialRead {
            path: path.to_path_buf(),
            source,
        })?;
        // `lines` drops the trailing "\n" or "\r\n"
        match content.lines().next() {
            Some(first) if !first.is_empty() => Ok(Self(first.to_string())),
            _ => Err(AppError::EmptyCredential {
                path: path.to_path_buf(),
            }),
        }
    }

    pub(crate) fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Where the credential comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CredentialSource {
    File(PathBuf),
    Account(String),
}

impl CredentialSource {
    pub(crate) fn load(&self, accounts: &HashMap<String, String>) -> Result<Credential, AppError> {
        match self {
            CredentialSource::File(path) => {
                tracing::debug!("reading session cookie from {}", path.display());
                Credential::from_file(path)
            }
            CredentialSource::Account(label) => {
                tracing::debug!("using session cookie of account \"{label}\"");
                let token = accounts.get(label).ok_or_else(|| AppError::UnknownAccount {
                    label: label.clone(),
                })?;
                let token = token.trim_end_matches(['\r', '\n']);
                if token.is_empty() {
                    return Err(AppError::EmptyAccount {
                        label: label.clone(),
                    });
                }
                Ok(Credential(token.to_string()))
            }
        }
    }
}

/// Default cookie file: `<config dir>/aocfetch/session_cookie`
pub(crate) fn default_session_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join(APP_DIR).join(SESSION_FILE_NAME),
        None => PathBuf::from(SESSION_FILE_NAME),
    }
}
