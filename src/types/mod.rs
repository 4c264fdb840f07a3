pub mod identifiers;
pub mod report;
pub mod statistics;

pub use identifiers::DocumentVersion;
pub use report::{AnalysisMetadata, FileReport, UploadReport};
pub use statistics::{GlobalVocabularyEntry, TermStat, WordSummary};
