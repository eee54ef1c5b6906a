use crate::consts::SESSION_COOKIE;
use crate::credential::Credential;
use crate::error::AppError;

/// Status and body of one input request
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputResponse {
    pub(crate) status: u16,
    pub(crate) body: Vec<u8>,
}

/// Blocking HTTP GET carrying the session cookie
pub(crate) trait Transport {
    fn get(
        &self,
        url: &str,
        credential: &Credential,
        user_agent: &str,
    ) -> Result<InputResponse, AppError>;
}

pub(crate) struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub(crate) fn new() -> Self {
        // No timeout is configured; ureq's defaults apply.
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(
        &self,
        url: &str,
        credential: &Credential,
        user_agent: &str,
    ) -> Result<InputResponse, AppError> {
        let response = self
            .agent
            .get(url)
            .header("Cookie", format!("{SESSION_COOKIE}={}", credential.token()))
            .header("User-Agent", user_agent)
            .call()
            .map_err(|e| AppError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Ok(InputResponse {
                status,
                body: Vec::new(),
            });
        }

        // Written out verbatim, so no UTF-8 decoding and no size cap
        let body = response
            .into_body()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| AppError::Body {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(InputResponse { status, body })
    }
}
