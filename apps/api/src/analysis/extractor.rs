//! Text Extractor — turns PDF bytes into plain text.
//!
//! Strategy chain:
//! 1. `pdf-extract`, page by page (layout-derived line breaks)
//! 2. `lopdf` page-stream reader; a page that fails contributes nothing
//!
//! Never returns an error. When both strategies fail the text is empty and the
//! extraction carries `ExtractionWarning::ExtractionFailed`.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("pdf-extract failed: {0}")]
    Structural(String),

    #[error("failed to load PDF: {0}")]
    Load(String),

    #[error("extractor panicked on malformed input")]
    Panicked,
}

/// Which strategy produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    Primary,
    Fallback,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionWarning {
    ExtractionFailed,
}

/// Extracted text plus provenance. `text` is empty (never absent) on failure.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub text: String,
    pub strategy: ExtractionStrategy,
    pub page_count: usize,
    pub warning: Option<ExtractionWarning>,
}

impl Extraction {
    pub fn failed() -> Self {
        Self {
            text: String::new(),
            strategy: ExtractionStrategy::None,
            page_count: 0,
            warning: Some(ExtractionWarning::ExtractionFailed),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.warning == Some(ExtractionWarning::ExtractionFailed)
    }
}

struct PageText {
    text: String,
    page_count: usize,
}

type StrategyFn = fn(&[u8]) -> Result<PageText, ExtractError>;

const STRATEGY_CHAIN: [(ExtractionStrategy, StrategyFn); 2] = [
    (ExtractionStrategy::Primary, extract_structural),
    (ExtractionStrategy::Fallback, extract_page_streams),
];

/// Runs the strategy chain over an in-memory PDF.
pub fn extract(document: &[u8]) -> Extraction {
    extract_with(&STRATEGY_CHAIN, document)
}

/// First strategy that neither errors nor panics wins.
fn extract_with(chain: &[(ExtractionStrategy, StrategyFn)], document: &[u8]) -> Extraction {
    for &(strategy, run) in chain {
        match run_isolated(run, document) {
            Ok(pages) => {
                debug!(
                    "Extracted {} chars from {} pages via {:?}",
                    pages.text.len(),
                    pages.page_count,
                    strategy
                );
                return Extraction {
                    text: pages.text,
                    strategy,
                    page_count: pages.page_count,
                    warning: None,
                };
            }
            Err(e) => warn!("{strategy:?} extraction failed, trying next strategy: {e}"),
        }
    }

    warn!("PDF text extraction failed: document may be encrypted or corrupted");
    Extraction::failed()
}

/// Reads a spooled document from disk on the blocking pool and extracts it.
/// An unreadable file is treated like an unreadable PDF.
pub async fn extract_file(path: &Path) -> Extraction {
    let path = path.to_path_buf();
    let result = tokio::task::spawn_blocking(move || match std::fs::read(&path) {
        Ok(bytes) => extract(&bytes),
        Err(e) => {
            warn!("Could not read spooled document {}: {e}", path.display());
            Extraction::failed()
        }
    })
    .await;

    result.unwrap_or_else(|e| {
        warn!("Extraction task aborted: {e}");
        Extraction::failed()
    })
}

/// Both PDF libraries can panic on hostile input; a panic is a strategy failure.
fn run_isolated(run: StrategyFn, document: &[u8]) -> Result<PageText, ExtractError> {
    panic::catch_unwind(AssertUnwindSafe(|| run(document))).unwrap_or(Err(ExtractError::Panicked))
}

fn extract_structural(document: &[u8]) -> Result<PageText, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(document)
        .map_err(|e| ExtractError::Structural(e.to_string()))?;

    Ok(PageText {
        text: pages.join("\n").trim().to_string(),
        page_count: pages.len(),
    })
}

fn extract_page_streams(document: &[u8]) -> Result<PageText, ExtractError> {
    let doc = lopdf::Document::load_mem(document).map_err(|e| ExtractError::Load(e.to_string()))?;

    let pages = doc.get_pages();
    let mut text = String::new();
    for page_number in pages.keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => debug!("Page {page_number} yielded no text: {e}"),
        }
    }

    Ok(PageText {
        text: text.trim().to_string(),
        page_count: pages.len(),
    })
}
