use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

// ── Static selectors ─────────────────────────────────────────────────────────

static H1_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());

static ANCHOR_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

// ── Public API ───────────────────────────────────────────────────────────────

/// Text of the first `<h1>` in document order, whitespace-normalized.
///
/// `None` only when the document has no `<h1>` at all; an empty heading
/// yields `Some("")`.
pub fn first_heading(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&H1_SEL)
        .next()
        .map(|el| normalize_text(collect_text(el)))
}

/// `href` values of every `<a>` that carries one, in document order.
///
/// Values are returned verbatim: relative links stay relative, duplicates and
/// empty attributes are kept.
pub fn anchor_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR_SEL)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}

// ── DOM utility helpers ──────────────────────────────────────────────────────

fn collect_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Collapse whitespace runs to one space and trim both ends.
fn normalize_text(text: String) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
