use tracing::{debug, info};

use crate::extract;
use crate::fetch::{fetch_html, FetchConfig};

/// Fetch `url` and return the text of its first `<h1>`.
///
/// Every failure, transport or structural, collapses to `None`. The cause is
/// only visible in the debug log.
pub async fn get_title(url: &str, config: &FetchConfig) -> Option<String> {
    let html = match fetch_html(url, config).await {
        Ok(html) => html,
        Err(e) => {
            debug!(url, error = %e, "fetch failed");
            return None;
        }
    };

    let title = extract::first_heading(&html);
    match &title {
        Some(t) => info!(url, title = %t, "found h1"),
        None => debug!(url, bytes = html.len(), "no h1 in page"),
    }
    title
}
