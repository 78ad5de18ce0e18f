//! Streams an uploaded resume to a temporary file for the extractor.
//!
//! The spooled copy is the only on-disk trace of a request. It is removed once
//! the analysis finishes; a failed removal is logged and otherwise ignored.

use std::path::Path;

use axum::extract::multipart::Field;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF";

pub struct SpooledUpload {
    file: NamedTempFile,
    file_name: Option<String>,
    content_type: Option<String>,
    head: Vec<u8>,
    len: u64,
}

impl SpooledUpload {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn size_bytes(&self) -> u64 {
        self.len
    }

    /// True when the bytes start with the PDF header, or the client labelled
    /// the upload as a PDF. Damaged PDFs still go to the extractor.
    pub fn looks_like_pdf(&self) -> bool {
        let named_pdf = self
            .file_name
            .as_deref()
            .is_some_and(|n| n.to_ascii_lowercase().ends_with(".pdf"));
        let typed_pdf = self.content_type.as_deref() == Some("application/pdf");
        self.head.starts_with(PDF_MAGIC) || named_pdf || typed_pdf
    }

    /// Deletes the spooled copy. Never fails the request.
    pub fn remove(self) {
        let path = self.file.path().to_path_buf();
        match self.file.close() {
            Ok(()) => debug!("Removed spooled upload {}", path.display()),
            Err(e) => warn!("Could not remove spooled upload {}: {e}", path.display()),
        }
    }
}

/// Writes a multipart field to a fresh temp file chunk by chunk.
pub async fn spool_field(mut field: Field<'_>) -> Result<SpooledUpload, AppError> {
    let file_name = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);

    let file = NamedTempFile::new().map_err(|e| AppError::Internal(e.into()))?;
    let writer = file.reopen().map_err(|e| AppError::Internal(e.into()))?;
    let mut writer = tokio::fs::File::from_std(writer);

    let mut head = Vec::with_capacity(PDF_MAGIC.len());
    let mut len = 0u64;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read resume upload: {e}")))?
    {
        if head.len() < PDF_MAGIC.len() {
            let take = (PDF_MAGIC.len() - head.len()).min(chunk.len());
            head.extend_from_slice(&chunk[..take]);
        }
        len += chunk.len() as u64;
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| AppError::Internal(e.into()))?;
    }
    writer
        .flush()
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(SpooledUpload {
        file,
        file_name,
        content_type,
        head,
        len,
    })
}
