use serde::{Deserialize, Serialize};

/// Fields recovered from a résumé's canonical text. Every field is
/// independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedFields {
    pub filename: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
}

/// Body of a successful `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub fields: ParsedFields,
    /// Canonical text, `None` when extraction produced nothing.
    pub raw_text: Option<String>,
}

impl AnalysisResponse {
    pub fn new(fields: ParsedFields, canonical_text: String) -> Self {
        Self {
            fields,
            raw_text: Some(canonical_text).filter(|t| !t.is_empty()),
        }
    }
}
