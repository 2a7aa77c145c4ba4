// Résumé analysis: PDF text extraction, canonicalization, heuristic field parsing.
// Everything here is synchronous; handlers run it inside spawn_blocking.

pub mod extract;
pub mod fields;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod skills;
pub mod upload;

use crate::resume::extract::{extract_text, ExtractError};
use crate::resume::fields::parse_fields;
use crate::resume::models::AnalysisResponse;
use crate::resume::normalize::normalize;

/// Runs the full pipeline over one uploaded document.
pub fn analyze_document(filename: &str, bytes: &[u8]) -> Result<AnalysisResponse, ExtractError> {
    let raw = extract_text(bytes)?;
    let canonical = normalize(&raw);
    let fields = parse_fields(filename, &canonical);
    Ok(AnalysisResponse::new(fields, canonical))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::extract::tests::build_pdf;

    #[test]
    fn test_analyze_document_end_to_end() {
        let pdf = build_pdf(&[
            "John Smith\nEmail: john@x.com\nPhone: 1234567890\nSkills: Python, react, AWS",
        ]);
        let response = analyze_document("john.pdf", &pdf).unwrap();
        let fields = &response.fields;
        assert_eq!(fields.filename, "john.pdf");
        assert_eq!(fields.name.as_deref(), Some("John Smith"));
        assert_eq!(fields.email.as_deref(), Some("john@x.com"));
        assert_eq!(fields.phone.as_deref(), Some("1234567890"));
        assert_eq!(
            fields.skills,
            Some(vec!["AWS".to_string(), "Python".to_string(), "React".to_string()])
        );
        assert!(response.raw_text.unwrap().starts_with("John Smith\nEmail: john@x.com"));
    }

    #[test]
    fn test_analyze_document_concatenates_pages() {
        let pdf = build_pdf(&["RESUME\nJane Doe", "Experience\nKubernetes and Go"]);
        let response = analyze_document("jane.pdf", &pdf).unwrap();
        assert_eq!(response.fields.name.as_deref(), Some("Jane Doe"));
        assert_eq!(
            response.fields.skills,
            Some(vec!["Go".to_string(), "Kubernetes".to_string()])
        );
    }

    #[test]
    fn test_analyze_document_with_blank_page_has_null_text() {
        let pdf = build_pdf(&[""]);
        let response = analyze_document("blank.pdf", &pdf).unwrap();
        assert!(response.raw_text.is_none());
        assert!(response.fields.name.is_none());
    }

    #[test]
    fn test_analyze_document_rejects_non_pdf() {
        assert!(matches!(
            analyze_document("x.pdf", b"plain text, not a document"),
            Err(ExtractError::DocumentParse(_))
        ));
    }
}
