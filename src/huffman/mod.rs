//! Huffman coding of document text into a textual `'0'`/`'1'` stream.
//!
//! Building runs in four phases: count symbols, merge the two lightest
//! nodes until one root remains, assign codes top-down, then encode the
//! content. Equal frequencies are resolved by code point for leaves and by
//! creation order for merged nodes, so the same content always produces the
//! same code map.

pub mod codes;
pub mod tree;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pagination::{Page, PagedText, PaginationError};

pub use codes::{CodeMap, CodingError};
pub use tree::{count_symbols, HuffmanNode, HuffmanTree};

/// Code map plus the full encoded stream of one document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HuffmanEncoding {
    pub code_map: CodeMap,
    pub encoded: String,
}

/// One window of an encoding, served together with its code map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HuffmanPage<'a> {
    pub code_map: &'a CodeMap,
    #[serde(flatten)]
    pub page: Page<'a>,
}

impl HuffmanEncoding {
    /// Number of bits in the encoded stream.
    pub fn encoded_len(&self) -> usize {
        // the stream is pure ASCII
        self.encoded.len()
    }

    pub fn page(&self, offset: usize, limit: usize) -> Result<HuffmanPage<'_>, PaginationError> {
        let page = PagedText::new(&self.encoded).page(offset, limit)?;
        Ok(HuffmanPage {
            code_map: &self.code_map,
            page,
        })
    }

    pub fn decode(&self) -> Result<String, CodingError> {
        self.code_map.decode(&self.encoded)
    }
}

/// Build the tree, assign codes and encode `content` in one pass.
///
/// Empty content yields an empty code map and an empty stream; content with
/// a single distinct symbol encodes every character as `"0"`.
pub fn build_huffman(content: &str) -> HuffmanEncoding {
    let tree = HuffmanTree::build(content);
    let code_map = tree.codes();

    debug_assert!(code_map.is_empty() || code_map.is_prefix_free());

    let bits = code_map.weighted_length(tree.frequencies());
    let mut encoded = String::with_capacity(usize::try_from(bits).unwrap_or(0));
    for symbol in content.chars() {
        // every symbol of the content has a code: the map was built from it
        if let Some(code) = code_map.get(symbol) {
            encoded.push_str(code);
        }
    }
    debug_assert_eq!(encoded.len() as u64, bits);

    debug!(
        symbols = code_map.len(),
        content_chars = tree.frequencies().values().sum::<u64>(),
        encoded_bits = encoded.len(),
        "huffman encoding built"
    );

    HuffmanEncoding { code_map, encoded }
}
