//! The fetch loop
//!
//! Walks December 1..=25 in order, stops at the first day that has not been
//! released yet, and aborts on the first failed request. Files written before
//! a failure are left in place.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::credential::Credential;
use crate::error::AppError;
use crate::utils::Clock;

use super::day::{input_url, output_file_name, release_schedule};
use super::transport::Transport;

pub(crate) const RETRY_BACKOFF: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub(crate) struct FetchOptions {
    pub(crate) year: i32,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    pub(crate) output_dir: PathBuf,
    /// Extra attempts per day after a retryable failure
    pub(crate) retries: usize,
    pub(crate) retry_backoff: Duration,
    pub(crate) quiet: bool,
}

#[derive(Debug, Default)]
pub(crate) struct FetchReport {
    /// Output files in day order
    pub(crate) written: Vec<PathBuf>,
    /// First day skipped because it is still in the future
    pub(crate) unreleased_day: Option<u32>,
}

pub(crate) fn fetch_inputs(
    options: &FetchOptions,
    credential: &Credential,
    clock: &dyn Clock,
    transport: &dyn Transport,
) -> Result<FetchReport, AppError> {
    let schedule = release_schedule(options.year)?;
    let today = clock.today();
    let mut report = FetchReport::default();

    if schedule.first().is_some_and(|(_, date)| today >= *date) {
        fs::create_dir_all(&options.output_dir).map_err(|source| AppError::OutputDir {
            path: options.output_dir.clone(),
            source,
        })?;
    }

    for (day, release) in schedule {
        if today < release {
            tracing::debug!("day {day} unlocks on {release}, today is {today}; stopping");
            report.unreleased_day = Some(day);
            break;
        }

        let url = input_url(&options.base_url, options.year, day);
        if !options.quiet {
            println!("Getting input for {day}/12/{}...", options.year);
        }
        let body = fetch_day(options, &url, credential, transport)?;

        let path = options.output_dir.join(output_file_name(day));
        fs::write(&path, body).map_err(|source| AppError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("wrote {}", path.display());
        report.written.push(path);
    }

    Ok(report)
}

fn fetch_day(
    options: &FetchOptions,
    url: &str,
    credential: &Credential,
    transport: &dyn Transport,
) -> Result<Vec<u8>, AppError> {
    let mut attempt = 0;
    loop {
        tracing::debug!("GET {url} (attempt {})", attempt + 1);
        let result = transport
            .get(url, credential, &options.user_agent)
            .and_then(|response| match response.status {
                200 => Ok(response.body),
                status => Err(AppError::Status {
                    url: url.to_string(),
                    status,
                }),
            });

        match result {
            Err(e) if attempt < options.retries && e.is_retryable() => {
                attempt += 1;
                tracing::warn!("{e}; retrying ({attempt}/{})", options.retries);
                std::thread::sleep(backoff_delay(options.retry_backoff, attempt));
            }
            other => return other,
        }
    }
}

/// Linear backoff, saturating instead of wrapping for huge attempt counts
fn backoff_delay(base: Duration, attempt: usize) -> Duration {
    base.saturating_mul(u32::try_from(attempt).unwrap_or(u32::MAX))
}
