use std::io::Write;

use crate::models::{PageLinks, PageTitle};
use crate::Error;

pub const TITLE_NOT_FOUND: &str = "Title could not be found";

/// Write the title report: the heading, the not-found message, or one JSON object.
pub fn render_title(out: &mut impl Write, report: &PageTitle, json: bool) -> Result<(), Error> {
    if json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    match &report.title {
        Some(title) => writeln!(out, "{}", title)?,
        None => writeln!(out, "{}", TITLE_NOT_FOUND)?,
    }
    Ok(())
}

/// Write one href per line, or one JSON object. No links means no lines.
pub fn render_links(out: &mut impl Write, report: &PageLinks, json: bool) -> Result<(), Error> {
    if json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    for href in &report.links {
        writeln!(out, "{}", href)?;
    }
    Ok(())
}
