//! The result document produced for a match request.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::LimitError;

use super::parsed_limit::ParsedLimit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchReport {
    /// The pattern exactly as supplied.
    pub pattern: String,
    /// Matched host names, sorted and unique.
    pub matched: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed: Option<ParsedLimit>,
}

impl MatchReport {
    /// Render the report as JSON, indented with two spaces when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> Result<String, LimitError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| LimitError::ReportRender(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatchReport {
        MatchReport {
            pattern: "web*:!web02".to_string(),
            matched: vec!["web01".to_string()],
            parsed: None,
        }
    }

    #[test]
    fn test_compact_json() {
        assert_eq!(
            sample().to_json(false).unwrap(),
            r#"{"pattern":"web*:!web02","matched":["web01"]}"#
        );
    }

    #[test]
    fn test_pretty_json() {
        let expected = "{\n  \"pattern\": \"web*:!web02\",\n  \"matched\": [\n    \"web01\"\n  ]\n}";
        assert_eq!(sample().to_json(true).unwrap(), expected);
    }
}
