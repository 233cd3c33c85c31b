use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A fetched page body, kept only for the duration of one scrape
#[derive(Debug, Clone)]
pub struct RawPage {
    /// URL the page was requested from
    pub url: String,

    /// Response body as text
    pub body: String,
}

impl RawPage {
    /// Create a new raw page
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }
}

/// The JSON document embedded in a results page.
///
/// The layout belongs to the listing site, so the value is kept as an
/// untyped JSON tree and serialized back out exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingPayload(Value);

impl ListingPayload {
    /// Wrap an already parsed JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the payload and return the JSON value
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Number of entries in the top-level `properties` array, if present
    pub fn property_count(&self) -> Option<usize> {
        self.0.get("properties")?.as_array().map(Vec::len)
    }
}

impl From<Value> for ListingPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Everything read from one results page
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedPage {
    /// The embedded JSON model
    pub payload: ListingPayload,

    /// Result count shown in the search header, if present
    pub displayed_results: Option<u64>,
}

impl ScrapedPage {
    /// One-line report of what was written to `path`
    pub fn summary(&self, path: &Path) -> String {
        match (self.payload.property_count(), self.displayed_results) {
            (Some(count), Some(total)) => format!(
                "Wrote {} properties to {} (site reports {} results)",
                count,
                path.display(),
                total
            ),
            (Some(count), None) => format!("Wrote {} properties to {}", count, path.display()),
            (None, _) => format!("Wrote payload to {}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_lines() {
        let path = Path::new("out/results.json");
        let mut page = ScrapedPage {
            payload: ListingPayload::new(json!({"properties": [{"id": 1}, {"id": 2}]})),
            displayed_results: Some(1234),
        };
        assert_eq!(
            page.summary(path),
            "Wrote 2 properties to out/results.json (site reports 1234 results)"
        );

        page.displayed_results = None;
        assert_eq!(page.summary(path), "Wrote 2 properties to out/results.json");

        page.payload = ListingPayload::new(json!({"model": "other"}));
        page.displayed_results = Some(5);
        assert_eq!(page.summary(path), "Wrote payload to out/results.json");
    }

    #[test]
    fn test_property_count() {
        let payload = ListingPayload::new(json!({"properties": [{"id": 1}, {"id": 2}]}));
        assert_eq!(payload.property_count(), Some(2));

        let payload = ListingPayload::new(json!({"resultCount": "12"}));
        assert_eq!(payload.property_count(), None);

        let payload = ListingPayload::new(json!([1, 2, 3]));
        assert_eq!(payload.property_count(), None);
    }

    #[test]
    fn test_serializes_transparently() {
        let value = json!({"properties": [{"id": 1, "price": 250000}]});
        let payload = ListingPayload::from(value.clone());
        assert_eq!(serde_json::to_value(&payload).unwrap(), value);
    }
}
