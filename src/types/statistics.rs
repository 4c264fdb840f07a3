use serde::{Deserialize, Serialize};

/// Corpus-wide statistics for one selected word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalVocabularyEntry {
    pub word: String,
    pub document_frequency: usize,
    /// Rounded to the engine precision.
    pub idf: f64,
}

/// One selected word as seen from a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermStat {
    pub word: String,
    pub tf: f64,
    pub idf: f64,
}

/// Aggregate of a selected word across the whole corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSummary {
    pub word: String,
    pub idf: f64,
    pub mean_tf: f64,
    pub total_tf: f64,
}
