use std::collections::BTreeMap;

use super::labels::compare_labels;
use super::stats::FileStatistics;

// ---------------------------------------------------------------------------
// Sample – one row of a clocking CSV
// ---------------------------------------------------------------------------

/// A single clock-rate measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Cycle / time index (x).
    pub timestamp: i64,
    /// Clock rate in MHz (y).
    pub clock_rate_mhz: f64,
}

impl Sample {
    pub fn new(timestamp: i64, clock_rate_mhz: f64) -> Self {
        Self {
            timestamp,
            clock_rate_mhz,
        }
    }
}

// ---------------------------------------------------------------------------
// IngestedFile – one parsed CSV before labelling
// ---------------------------------------------------------------------------

/// The samples and running statistics read from one CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedFile {
    /// File name only (no directory), used as the key of the label map.
    pub file_name: String,
    /// Samples in row order.
    pub samples: Vec<Sample>,
    pub stats: FileStatistics,
}

// ---------------------------------------------------------------------------
// LabeledBlock – an IngestedFile with its rank label attached
// ---------------------------------------------------------------------------

/// One RAM block as shown in the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledBlock {
    /// Assigned rank label ("A", "B", …).
    pub block_name: String,
    pub source_file_name: String,
    pub samples: Vec<Sample>,
    pub stats: FileStatistics,
}

impl LabeledBlock {
    pub fn from_ingested(file: IngestedFile, label: String) -> Self {
        LabeledBlock {
            block_name: label,
            source_file_name: file.file_name,
            samples: file.samples,
            stats: file.stats,
        }
    }
}

// ---------------------------------------------------------------------------
// FileDiagnostic – a file that was skipped during a load
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiagnostic {
    pub file_name: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// ParsedResult – the complete output of one ingestion pass
// ---------------------------------------------------------------------------

/// Labelled blocks plus the file → label mapping.
///
/// Replaced wholesale on every load; never updated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedResult {
    /// Blocks in ingestion order (not re-sorted by label).
    pub blocks: Vec<LabeledBlock>,
    /// File name → assigned label.
    pub file_label_map: BTreeMap<String, String>,
    /// Files that could not be ingested.
    pub diagnostics: Vec<FileDiagnostic>,
}

impl ParsedResult {
    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no file was ingested successfully.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Look up a block by its assigned label.
    pub fn block(&self, label: &str) -> Option<&LabeledBlock> {
        self.blocks.iter().find(|b| b.block_name == label)
    }

    /// Distinct block labels in rank order (used for the checkbox panel).
    pub fn sorted_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.blocks.iter().map(|b| b.block_name.clone()).collect();
        labels.sort_by(|a, b| compare_labels(a, b));
        labels.dedup();
        labels
    }
}
