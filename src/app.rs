use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Config;
use crate::consts::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::credential::{CredentialSource, default_session_path};
use crate::error::AppError;
use crate::fetch::{FetchOptions, FetchReport, RETRY_BACKOFF, UreqTransport, fetch_inputs};
use crate::utils::Timezone;

/// Pick the credential source: named account, explicit file, then the default file
pub(crate) fn credential_source(cli: &Cli) -> CredentialSource {
    if let Some(label) = &cli.account {
        return CredentialSource::Account(label.clone());
    }
    CredentialSource::File(
        cli.session_file
            .clone()
            .unwrap_or_else(default_session_path),
    )
}

pub(crate) fn fetch_options(cli: &Cli) -> FetchOptions {
    FetchOptions {
        year: cli.year,
        base_url: cli
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        user_agent: cli
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        output_dir: cli
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(".")),
        retries: cli.retries.unwrap_or(0),
        retry_backoff: RETRY_BACKOFF,
        quiet: cli.quiet,
    }
}

/// Resolve everything from `cli` (already merged with `config`) and run the fetch loop
pub(crate) fn run(cli: &Cli, config: &Config) -> Result<FetchReport, AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let credential = credential_source(cli).load(&config.accounts)?;
    let options = fetch_options(cli);
    tracing::debug!(
        "fetching {} into {} (timezone {:?})",
        options.year,
        options.output_dir.display(),
        timezone
    );

    fetch_inputs(&options, &credential, &timezone, &UreqTransport::new())
}
