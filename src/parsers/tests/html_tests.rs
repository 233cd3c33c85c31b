use crate::parsers::html;
use scraper::Html;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_blocks_in_document_order() {
        let page = "<html><head><script>var a = 1;</script></head>\
                    <body><script src=\"/x.js\"></script><script>var b = 2;</script></body></html>";
        let scripts = html::script_blocks(&Html::parse_document(page));
        assert_eq!(scripts, vec!["var a = 1;", "var b = 2;"]);
    }

    #[test]
    fn test_script_text_is_not_entity_decoded() {
        let page = "<script>window.m = {\"name\": \"A &amp; B\", \"lt\": \"<b>\"}</script>";
        let scripts = html::script_blocks(&Html::parse_document(page));
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].contains("A &amp; B"));
        assert!(scripts[0].contains("<b>"));
    }

    #[test]
    fn test_displayed_result_count() {
        let page = "<div><span class=\"searchHeader-resultCount\"> 1,234 </span></div>";
        assert_eq!(
            html::displayed_result_count(&Html::parse_document(page)),
            Some(1234)
        );
    }

    #[test]
    fn test_displayed_result_count_missing_or_garbled() {
        let missing = Html::parse_document("<p>nothing here</p>");
        assert_eq!(html::displayed_result_count(&missing), None);

        let garbled =
            Html::parse_document("<span class=\"searchHeader-resultCount\">many</span>");
        assert_eq!(html::displayed_result_count(&garbled), None);
    }
}
