//! Deterministic corpus statistics and Huffman coding for document services.
//!
//! `corpus-core` computes corpus-wide TF-IDF tables over a batch of decoded
//! texts and produces a textual Huffman encoding of a document, delivered in
//! bounded pages. All operations are pure and deterministic: identical
//! inputs always produce identical outputs, including every tie-break.
//!
//! I/O, persistence and request parsing belong to the caller; the crate
//! takes decoded text and plain configuration values.

pub mod analysis;
pub mod config;
pub mod document;
pub mod huffman;
pub mod metrics;
pub mod pagination;
pub mod statistics;
pub mod tokenize;
pub mod types;

pub use analysis::DocumentAnalyzer;
pub use config::EngineConfig;
pub use huffman::{build_huffman, CodeMap, HuffmanEncoding};
pub use pagination::{paginate, Page};
pub use statistics::{compute_corpus_statistics, CorpusStatistics, StatisticsEngine};
pub use tokenize::{tokenize, Tokenizer, WordTokenizer};
