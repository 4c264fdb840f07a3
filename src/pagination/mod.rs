use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::PaginationConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid page limit: {0}")]
    InvalidLimit(usize),
}

/// One bounded window of a larger text. Positions count characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<'a> {
    pub slice: &'a str,
    pub total_size: usize,
    pub offset: usize,
    pub limit: usize,
    pub is_end: bool,
}

impl<'a> Page<'a> {
    /// Offset of the page that follows this one, if any.
    pub fn next_offset(&self) -> Option<usize> {
        if self.is_end {
            None
        } else {
            Some(self.offset + self.limit)
        }
    }
}

/// A text measured once, then sliced any number of times.
///
/// Holding one of these per request lets every page reuse the same encode
/// instead of recomputing it.
#[derive(Debug, Clone, Copy)]
pub struct PagedText<'a> {
    data: &'a str,
    total_size: usize,
    ascii: bool,
}

impl<'a> PagedText<'a> {
    pub fn new(data: &'a str) -> Self {
        let ascii = data.is_ascii();
        let total_size = if ascii { data.len() } else { data.chars().count() };
        Self {
            data,
            total_size,
            ascii,
        }
    }

    pub fn total_size(&self) -> usize {
        self.total_size
    }

    pub fn page(&self, offset: usize, limit: usize) -> Result<Page<'a>, PaginationError> {
        if limit == 0 {
            return Err(PaginationError::InvalidLimit(limit));
        }

        let end = offset.saturating_add(limit);
        let slice = if self.ascii {
            let start = offset.min(self.data.len());
            &self.data[start..end.min(self.data.len())]
        } else {
            let start = byte_offset(self.data, offset);
            let rest = &self.data[start..];
            &rest[..byte_offset(rest, limit)]
        };

        Ok(Page {
            slice,
            total_size: self.total_size,
            offset,
            limit,
            is_end: end >= self.total_size,
        })
    }

    /// Every page from the start, in order.
    pub fn pages(&self, limit: usize) -> Result<Vec<Page<'a>>, PaginationError> {
        let mut pages = Vec::new();
        let mut offset = 0;
        loop {
            let page = self.page(offset, limit)?;
            let next = page.next_offset();
            pages.push(page);
            match next {
                Some(next) => offset = next,
                None => return Ok(pages),
            }
        }
    }
}

/// Byte index of the `chars`-th character, or the end of the text.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(index, _)| index)
}

/// Applies configured defaults and bounds to caller-supplied limits.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Missing limits take the default; oversized limits are clamped.
    pub fn effective_limit(&self, limit: Option<usize>) -> usize {
        limit
            .unwrap_or(self.config.default_limit)
            .min(self.config.max_limit)
    }

    pub fn page<'a>(
        &self,
        text: &PagedText<'a>,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Page<'a>, PaginationError> {
        let limit = self.effective_limit(limit);
        debug!(offset, limit, total_size = text.total_size(), "serving page");
        text.page(offset, limit)
    }
}

/// Slice `data[offset .. offset + limit]` (in characters).
pub fn paginate(data: &str, offset: usize, limit: usize) -> Result<Page<'_>, PaginationError> {
    PagedText::new(data).page(offset, limit)
}
