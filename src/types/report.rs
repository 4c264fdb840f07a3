use serde::{Deserialize, Serialize};

use super::statistics::{TermStat, WordSummary};

/// Per-file part of an upload report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub name: String,
    pub version: String,
    pub size: usize,
    pub word_count: usize,
    pub metrics: Vec<TermStat>,
}

/// Metadata describing how the vocabulary was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub documents_considered: usize,
    pub distinct_words: usize,
    pub top_k: usize,
    pub words_selected: usize,
}

/// The final result of analysing one upload batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReport {
    pub files: Vec<FileReport>,
    pub top_words: Vec<WordSummary>,
    pub analysis: AnalysisMetadata,
}
