use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::config::DocumentLimits;
use crate::types::identifiers::DocumentVersion;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Document {name} is {size} bytes, limit is {limit}")]
    TooLarge {
        name: String,
        size: usize,
        limit: usize,
    },
    #[error("No documents provided")]
    EmptyBatch,
}

/// An uploaded text, validated and ready for analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub version: DocumentVersion,
    /// Size of the upload in bytes, before trimming.
    pub size: usize,
    pub content: String,
}

impl Document {
    /// Ingest raw bytes into a Document.
    ///
    /// This is the ONLY way to construct a Document.
    /// It enforces all invariants: size limit, UTF-8 validity, trimmed
    /// content and a version computed on that content.
    pub fn ingest(
        name: impl Into<String>,
        raw_content: Vec<u8>,
        limits: &DocumentLimits,
    ) -> Result<Self, DocumentError> {
        let name = name.into();
        let size = raw_content.len();

        if size > limits.max_document_bytes {
            warn!(%name, size, limit = limits.max_document_bytes, "document rejected: too large");
            return Err(DocumentError::TooLarge {
                name,
                size,
                limit: limits.max_document_bytes,
            });
        }

        let content = String::from_utf8(raw_content).map_err(|e| {
            warn!(%name, "document rejected: invalid UTF-8");
            DocumentError::InvalidUtf8(e)
        })?;
        let trimmed = content.trim();
        let content = if trimmed.len() == content.len() {
            content
        } else {
            trimmed.to_string()
        };

        let version = DocumentVersion::from_content(content.as_bytes());

        Ok(Document {
            name,
            version,
            size,
            content,
        })
    }

    /// Ingest a whole upload. Fails on the first invalid file; an empty
    /// upload is rejected.
    pub fn ingest_batch<I, N>(files: I, limits: &DocumentLimits) -> Result<Vec<Self>, DocumentError>
    where
        I: IntoIterator<Item = (N, Vec<u8>)>,
        N: Into<String>,
    {
        let documents = files
            .into_iter()
            .map(|(name, raw)| Self::ingest(name, raw, limits))
            .collect::<Result<Vec<_>, _>>()?;

        if documents.is_empty() {
            return Err(DocumentError::EmptyBatch);
        }
        Ok(documents)
    }
}
