pub mod html;
pub mod script;

#[cfg(test)]
mod tests;

use crate::error::{Result, ScrapeError};
use crate::results::{ListingPayload, ScrapedPage};
use scraper::Html;
use script::{AssignmentFinder, ScriptMatch};

/// Extracts the JSON payload assigned to `marker` inside a page's scripts.
///
/// Script blocks are searched in document order. A page with no script
/// elements at all is searched as a bare script.
pub fn extract_payload(page: &str, marker: &str) -> Result<ListingPayload> {
    let doc = Html::parse_document(page);
    payload_from_document(&doc, page, marker)
}

/// Parses the page once and pulls out both the payload and the result
/// count shown in the search header.
pub fn scrape_page(page: &str, marker: &str) -> Result<ScrapedPage> {
    let doc = Html::parse_document(page);
    let payload = payload_from_document(&doc, page, marker)?;

    Ok(ScrapedPage {
        payload,
        displayed_results: html::displayed_result_count(&doc),
    })
}

fn payload_from_document(doc: &Html, page: &str, marker: &str) -> Result<ListingPayload> {
    let finder = AssignmentFinder::new(marker)
        .map_err(|e| ScrapeError::Config(format!("bad marker `{}`: {}", marker, e)))?;

    let mut scripts = html::script_blocks(doc);
    if scripts.is_empty() {
        ::log::debug!("No script elements found, scanning page text directly");
        scripts.push(page.to_string());
    }

    let mut first_error = None;
    for (index, script) in scripts.iter().enumerate() {
        match finder.find(script) {
            ScriptMatch::Found(value) => {
                ::log::debug!("Found `{}` in script block {}", marker, index);
                return Ok(ListingPayload::new(value));
            }
            ScriptMatch::Invalid(e) => {
                first_error.get_or_insert(e);
            }
            ScriptMatch::Absent => {}
        }
    }

    match first_error {
        Some(source) => Err(ScrapeError::Parse {
            context: format!("assignment to `{}`", marker),
            source,
        }),
        None => Err(ScrapeError::Extraction {
            marker: marker.to_string(),
        }),
    }
}
