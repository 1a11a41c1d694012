use tracing::info;

use crate::extract;
use crate::fetch::{fetch_html, FetchConfig, FetchError};

/// Fetch `url` and return the `href` of every anchor that has one.
///
/// Transport failures are passed straight back to the caller.
pub async fn list_links(url: &str, config: &FetchConfig) -> Result<Vec<String>, FetchError> {
    let html = fetch_html(url, config).await?;
    let links = extract::anchor_hrefs(&html);
    info!(url, count = links.len(), "collected hrefs");
    Ok(links)
}
