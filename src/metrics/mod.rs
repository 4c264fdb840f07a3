use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::statistics::round_to;

const SECONDS_PRECISION: u32 = 3;

/// Running processing-time aggregate across upload batches.
///
/// Pure value type: the caller loads it, records a batch, and stores it back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessingMetrics {
    pub total_files_uploaded: u64,
    pub total_batches_uploaded: u64,
    pub total_processing_time: f64,
    pub min_time_processed: Option<f64>,
    pub max_time_processed: Option<f64>,
    pub sum_time_processed: f64,
    pub latest_file_processed_timestamp: Option<DateTime<Utc>>,
}

impl ProcessingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_batch(&mut self, elapsed: Duration, files_count: usize, at: DateTime<Utc>) {
        let seconds = round_to(elapsed.as_secs_f64(), SECONDS_PRECISION);

        self.total_files_uploaded += files_count as u64;
        self.total_batches_uploaded += 1;
        self.total_processing_time =
            round_to(self.total_processing_time + seconds, SECONDS_PRECISION);
        self.sum_time_processed = round_to(self.sum_time_processed + seconds, SECONDS_PRECISION);
        self.min_time_processed = Some(self.min_time_processed.map_or(seconds, |m| m.min(seconds)));
        self.max_time_processed = Some(self.max_time_processed.map_or(seconds, |m| m.max(seconds)));
        self.latest_file_processed_timestamp = Some(at);
    }

    /// Mean seconds per batch; `None` before the first batch.
    pub fn mean_batch_time(&self) -> Option<f64> {
        if self.total_batches_uploaded == 0 {
            return None;
        }
        Some(round_to(
            self.sum_time_processed / self.total_batches_uploaded as f64,
            SECONDS_PRECISION,
        ))
    }
}
