//! Work item records from the issue tracker

use serde::Deserialize;

const NOT_AVAILABLE: &str = "N/A";

/// A story row as returned by the ServiceNow table API
///
/// Only `number` and `short_description` are requested, and either may be
/// missing from the row.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkItem {
    /// Public identifier, e.g. `STRY0012345`
    #[serde(default)]
    pub number: Option<String>,
    /// Free-text summary of the story
    #[serde(default)]
    pub short_description: Option<String>,
}

impl WorkItem {
    pub fn new(number: impl Into<String>, short_description: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
            short_description: Some(short_description.into()),
        }
    }

    pub fn number(&self) -> &str {
        self.number.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn short_description(&self) -> &str {
        self.short_description.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_render_as_not_available() {
        let item: WorkItem =
            serde_json::from_str(r#"{"number": "STRY001"}"#).expect("row should deserialize");
        assert_eq!(item.number(), "STRY001");
        assert_eq!(item.short_description(), "N/A");
    }
}
