/// Data layer: CSV ingestion, statistics, ranking and chart binding.
///
/// Architecture:
/// ```text
///   directory of *.csv
///        │
///        ▼
///   ┌──────────┐
///   │ pipeline  │  list files, collect per-file results
///   └──────────┘
///        │ each file
///        ▼
///   ┌──────────┐
///   │  loader   │  header synonyms → Vec<Sample> + FileStatistics
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  labels   │  rank by average → "A", "B", …
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ParsedResult  │  Vec<LabeledBlock>, file → label
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series   │  selected labels → coloured plot lines
///   └──────────┘
/// ```

pub mod error;
pub mod labels;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod sample;
pub mod series;
pub mod stats;
