use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// Outcome of scanning one script for the marker
#[derive(Debug)]
pub enum ScriptMatch {
    /// The marker does not occur in the script
    Absent,
    /// The marker occurs and the literal after it parsed
    Found(Value),
    /// The marker occurs but the literal after it is not valid JSON
    Invalid(serde_json::Error),
}

/// Finds `<marker> = <json>` assignments in JavaScript source
#[derive(Debug)]
pub struct AssignmentFinder {
    pattern: Regex,
}

impl AssignmentFinder {
    /// Build a finder for the given assignment target, e.g. `window.jsonModel`
    pub fn new(marker: &str) -> Result<Self, regex::Error> {
        // The marker must not be the tail of a longer identifier or property path
        let pattern = Regex::new(&format!(
            r"(?:^|[^\w$.]){}\s*=\s*",
            regex::escape(marker.trim())
        ))?;
        Ok(Self { pattern })
    }

    /// Scan a script and parse the JSON literal assigned to the marker.
    ///
    /// Only the first complete JSON value after `=` is read, so a trailing
    /// `;` or further statements on the same line are ignored. When the
    /// marker occurs more than once, the first assignment that parses wins.
    pub fn find(&self, script: &str) -> ScriptMatch {
        let mut first_error = None;

        for m in self.pattern.find_iter(script) {
            match parse_leading_value(&script[m.end()..]) {
                Ok(value) => return ScriptMatch::Found(value),
                Err(e) => {
                    ::log::debug!("Assignment at byte {} is not valid JSON: {}", m.start(), e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => ScriptMatch::Invalid(e),
            None => ScriptMatch::Absent,
        }
    }
}

/// Parse the JSON value at the start of `text`, ignoring whatever follows it
fn parse_leading_value(text: &str) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    Value::deserialize(&mut de)
}
