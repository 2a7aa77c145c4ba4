//! PDF text extraction, page by page.
//!
//! A document that cannot be loaded is an error. A page that cannot be
//! decoded is not: it is recorded as [`PageOutcome::Failed`] and contributes
//! an empty string to the joined text.

use lopdf::Document;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    DocumentParse(#[from] lopdf::Error),
}

/// Result of extracting a single page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Extracted(String),
    Failed { page: u32, reason: String },
}

impl PageOutcome {
    pub fn text(&self) -> &str {
        match self {
            PageOutcome::Extracted(text) => text,
            PageOutcome::Failed { .. } => "",
        }
    }
}

/// Loads `bytes` as a PDF and extracts every page in document order.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<PageOutcome>, ExtractError> {
    let doc = Document::load_mem(bytes)?;

    let outcomes = doc
        .get_pages()
        .into_keys()
        .map(|page| match doc.extract_text(&[page]) {
            Ok(text) => PageOutcome::Extracted(text),
            Err(e) => PageOutcome::Failed {
                page,
                reason: e.to_string(),
            },
        })
        .collect::<Vec<_>>();

    debug!(pages = outcomes.len(), "Extracted PDF pages");
    Ok(outcomes)
}

/// Joins page outcomes with `"\n"`; failed pages contribute nothing.
pub fn join_pages(outcomes: &[PageOutcome]) -> String {
    outcomes
        .iter()
        .map(PageOutcome::text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts the whole document's text.
///
/// When the document loads but no page yields any text, a second,
/// whole-document engine is tried. Its failures are swallowed.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let outcomes = extract_pages(bytes)?;
    for outcome in &outcomes {
        if let PageOutcome::Failed { page, reason } = outcome {
            warn!(page, "Page text extraction failed: {reason}");
        }
    }
    let text = join_pages(&outcomes);

    if text.trim().is_empty() && !outcomes.is_empty() {
        if let Some(fallback) = fallback_extract(bytes) {
            debug!(chars = fallback.len(), "Recovered text with fallback extractor");
            return Ok(fallback);
        }
    }

    Ok(text)
}

fn fallback_extract(bytes: &[u8]) -> Option<String> {
    // pdf-extract panics on some malformed font programs.
    let result = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
    match result {
        Ok(Ok(text)) if !text.trim().is_empty() => Some(text),
        Ok(Ok(_)) => None,
        Ok(Err(e)) => {
            warn!("Fallback PDF extraction failed: {e}");
            None
        }
        Err(_) => {
            warn!("Fallback PDF extraction panicked");
            None
        }
    }
}
