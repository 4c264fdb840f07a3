use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash version.
///
/// Two uploads with identical content share a version, so callers can key
/// their own caches of derived artifacts (statistics, Huffman output) on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DocumentVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without the algorithm prefix.
    pub fn digest(&self) -> &str {
        self.0.strip_prefix("sha256:").unwrap_or(&self.0)
    }
}
