mod day;
mod run;
mod transport;

pub(crate) use run::{FetchOptions, FetchReport, RETRY_BACKOFF, fetch_inputs};
pub(crate) use transport::UreqTransport;
