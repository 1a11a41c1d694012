use std::time::Duration;

use tracing::debug;
use url::Url;

// ── Constants ────────────────────────────────────────────────────────────────

const USER_AGENT: &str = concat!("page-scrape/", env!("CARGO_PKG_VERSION"));
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    InvalidUrl(String),
    #[error("Upstream returned status {0}")]
    Status(u16),
    #[error("{0}")]
    Request(String),
}

// ── Configuration ────────────────────────────────────────────────────────────

/// Knobs for the single GET each program performs.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(10),
            user_agent: USER_AGENT.to_string(),
            max_redirects: 10,
        }
    }
}

// ── URL validation ───────────────────────────────────────────────────────────

pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url)
        .map_err(|e| FetchError::InvalidUrl(format!("Invalid URL {url:?}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl(format!(
            "Unsupported scheme {other:?}, only http and https are allowed"
        ))),
    }
}

// ── HTTP fetch ───────────────────────────────────────────────────────────────

/// GET `url` and return the response body as text.
///
/// Any non-2xx status is an error; the body is not inspected for content type,
/// whatever comes back is handed to the HTML parser.
pub async fn fetch_html(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let url = validate_url(url)?;

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static(ACCEPT_HTML),
    );

    let client = reqwest::ClientBuilder::new()
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout)
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .build()
        .map_err(|e| FetchError::Request(e.to_string()))?;

    debug!(%url, "GET");
    let response = client.get(url.clone()).send().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Request(format!("TimeoutError: {}", e))
        } else if e.is_connect() {
            FetchError::Request(format!("ConnectError: {}", e))
        } else {
            FetchError::Request(format!("RequestError: {}", e))
        }
    })?;

    let status = response.status();
    debug!(%url, status = status.as_u16(), "response");
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))
}
