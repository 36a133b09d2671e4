use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::model::IngestedFile;

// ---------------------------------------------------------------------------
// Label schemes
// ---------------------------------------------------------------------------

/// How a zero-based rank becomes a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LabelScheme {
    /// A..Z, AA..AZ, BA..BZ, …, ZZ, AAA, … (unique for every rank).
    #[default]
    Spreadsheet,
    /// A..Z, then "A" + letter for every later rank. Repeats AA..AZ from
    /// rank 52 onwards.
    Legacy,
}

impl LabelScheme {
    pub fn label(self, rank: usize) -> String {
        match self {
            LabelScheme::Spreadsheet => spreadsheet_label(rank),
            LabelScheme::Legacy => legacy_label(rank),
        }
    }
}

fn letter(offset: usize) -> char {
    (b'A' + (offset % 26) as u8) as char
}

/// Bijective base-26.
fn spreadsheet_label(rank: usize) -> String {
    let mut n = rank + 1;
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(letter(n));
        n /= 26;
    }
    out.iter().rev().collect()
}

fn legacy_label(rank: usize) -> String {
    if rank < 26 {
        letter(rank).to_string()
    } else {
        format!("A{}", letter(rank - 26))
    }
}

/// Order labels by the rank they encode: shorter first, then alphabetical.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Rank files by descending average clock rate and label them.
///
/// The sort is stable: files with equal averages keep their input order.
pub fn assign_labels(files: &[IngestedFile], scheme: LabelScheme) -> BTreeMap<String, String> {
    let mut ranked: Vec<&IngestedFile> = files.iter().collect();
    ranked.sort_by(|a, b| b.stats.average().total_cmp(&a.stats.average()));

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, file)| (file.file_name.clone(), scheme.label(rank)))
        .collect()
}
