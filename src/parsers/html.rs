use scraper::{Html, Selector};

/// Returns the text of every `<script>` element, in document order
pub fn script_blocks(doc: &Html) -> Vec<String> {
    let script_selector = Selector::parse("script").expect("static selector is valid");

    let scripts = doc
        .select(&script_selector)
        .map(|e| e.text().collect::<String>())
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<String>>();

    ::log::debug!("HTML parser found {} non-empty script blocks", scripts.len());
    scripts
}

/// Total number of results as displayed in the search header.
///
/// The site shows more matches than it lets you page through, so this can
/// be larger than the number of properties in the embedded payload.
pub fn displayed_result_count(doc: &Html) -> Option<u64> {
    let count_selector =
        Selector::parse("span.searchHeader-resultCount").expect("static selector is valid");

    let text = doc
        .select(&count_selector)
        .next()?
        .text()
        .collect::<String>();

    let digits: String = text.trim().chars().filter(|c| *c != ',').collect();
    digits.parse().ok()
}
