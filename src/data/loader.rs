use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::error::IngestError;
use super::model::{IngestedFile, Sample};
use super::stats::FileStatistics;

// ---------------------------------------------------------------------------
// Column synonyms
// ---------------------------------------------------------------------------

/// Header names accepted for the timestamp field, highest priority first.
pub const TIMESTAMP_ALIASES: &[&str] = &["timestamp", "time", "cycle", "index", "time_index"];

/// Header names accepted for the clock-rate field, highest priority first.
pub const CLOCK_RATE_ALIASES: &[&str] = &[
    "clock_rate",
    "rate",
    "mhz",
    "frequency",
    "clock",
    "clock_rate_mhz",
];

/// Ordered candidate header names for each field. Matching is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAliases {
    pub timestamp: Vec<String>,
    pub clock_rate: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            timestamp: TIMESTAMP_ALIASES.iter().map(|s| s.to_string()).collect(),
            clock_rate: CLOCK_RATE_ALIASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Alias lists resolved against one file's header row.
struct ColumnIndex {
    timestamp: Vec<usize>,
    clock_rate: Vec<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, aliases: &ColumnAliases) -> Self {
        let mut by_name: HashMap<String, usize> = HashMap::new();
        for (idx, name) in headers.iter().enumerate() {
            by_name.entry(name.trim().to_ascii_lowercase()).or_insert(idx);
        }

        let lookup = |candidates: &[String]| -> Vec<usize> {
            candidates
                .iter()
                .filter_map(|c| by_name.get(&c.to_ascii_lowercase()).copied())
                .collect()
        };

        ColumnIndex {
            timestamp: lookup(&aliases.timestamp),
            clock_rate: lookup(&aliases.clock_rate),
        }
    }

    fn sample(&self, record: &StringRecord) -> Sample {
        Sample {
            timestamp: first_parsed(record, &self.timestamp).unwrap_or(0),
            clock_rate_mhz: first_parsed(record, &self.clock_rate).unwrap_or(0.0),
        }
    }
}

/// First candidate column whose cell parses as `T`. Unparseable cells fall
/// through to the next candidate.
fn first_parsed<T: FromStr>(record: &StringRecord, candidates: &[usize]) -> Option<T> {
    candidates
        .iter()
        .filter_map(|&idx| record.get(idx))
        .find_map(|cell| cell.parse::<T>().ok())
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read one clocking CSV from disk.
///
/// The file handle lives only for the duration of this call.
pub fn ingest_file(path: &Path, aliases: &ColumnAliases) -> Result<IngestedFile, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    ingest_reader(file_name, file, aliases).map_err(|source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse CSV text from any reader. The first non-empty line is the header.
///
/// Rows may be shorter or longer than the header; missing cells read as 0.
pub fn ingest_reader<R: Read>(
    file_name: String,
    reader: R,
    aliases: &ColumnAliases,
) -> Result<IngestedFile, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = ColumnIndex::resolve(reader.headers()?, aliases);

    let mut samples = Vec::new();
    let mut stats = FileStatistics::new();
    for result in reader.records() {
        let record = result?;
        let sample = columns.sample(&record);
        stats.update(sample.clock_rate_mhz);
        samples.push(sample);
    }

    log::debug!(
        "{file_name}: {} samples, avg {:.2} MHz",
        samples.len(),
        stats.average()
    );

    Ok(IngestedFile {
        file_name,
        samples,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> IngestedFile {
        ingest_reader("t.csv".into(), text.as_bytes(), &ColumnAliases::default()).unwrap()
    }

    #[test]
    fn canonical_header() {
        let file = parse("timestamp,clock_rate_mhz\n0,1600.5\n1,1598.25\n");
        assert_eq!(
            file.samples,
            vec![Sample::new(0, 1600.5), Sample::new(1, 1598.25)]
        );
        assert_eq!(file.stats.count(), 2);
    }

    #[test]
    fn synonym_columns() {
        let file = parse("time,frequency\n0,1500.0\n1,1510.5\n");
        assert_eq!(
            file.samples,
            vec![Sample::new(0, 1500.0), Sample::new(1, 1510.5)]
        );
    }

    #[test]
    fn header_case_and_whitespace_ignored() {
        let file = parse(" Cycle , MHz \n 7 , 1400 \n");
        assert_eq!(file.samples, vec![Sample::new(7, 1400.0)]);
    }

    #[test]
    fn priority_order_wins() {
        // "timestamp" outranks "index"; "clock_rate" outranks "mhz".
        let file = parse("index,mhz,timestamp,clock_rate\n1,2.0,3,4.0\n");
        assert_eq!(file.samples, vec![Sample::new(3, 4.0)]);
    }

    #[test]
    fn unparseable_cell_falls_through_to_next_synonym() {
        let file = parse("timestamp,cycle,rate\nabc,5,1.5\n");
        assert_eq!(file.samples, vec![Sample::new(5, 1.5)]);
    }

    #[test]
    fn bad_cells_default_to_zero_and_row_is_kept() {
        let file = parse("timestamp,clock_rate\nx,1500\n2,n/a\n3,1400\n");
        assert_eq!(
            file.samples,
            vec![
                Sample::new(0, 1500.0),
                Sample::new(2, 0.0),
                Sample::new(3, 1400.0)
            ]
        );
        // Defaulted rate still feeds the accumulator.
        assert_eq!(file.stats.count(), 3);
        assert_eq!(file.stats.min(), Some(0.0));
    }

    #[test]
    fn missing_columns_default_to_zero() {
        let file = parse("foo,bar\n1,2\n3,4\n");
        assert_eq!(file.samples, vec![Sample::new(0, 0.0); 2]);
    }

    #[test]
    fn empty_lines_are_skipped() {
        let file = parse("timestamp,rate\n\n0,1.0\n\n1,2.0\n\n");
        assert_eq!(file.samples.len(), 2);
    }

    #[test]
    fn header_only_yields_no_samples() {
        let file = parse("timestamp,rate\n");
        assert!(file.samples.is_empty());
        assert_eq!(file.stats.average(), 0.0);
    }

    #[test]
    fn short_and_long_rows_are_kept() {
        let file = parse("timestamp,rate\n0,1500\n1\n2,1510,\n3,1520,extra\n");
        assert_eq!(
            file.samples,
            vec![
                Sample::new(0, 1500.0),
                Sample::new(1, 0.0),
                Sample::new(2, 1510.0),
                Sample::new(3, 1520.0)
            ]
        );
        assert_eq!(file.stats.count(), 4);
    }

    #[test]
    fn invalid_utf8_fails_the_file() {
        let err = ingest_reader(
            "bad.csv".into(),
            &b"timestamp,rate\n0,\xff\xfe\n"[..],
            &ColumnAliases::default(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn custom_aliases() {
        let aliases = ColumnAliases {
            timestamp: vec!["tick".into()],
            clock_rate: vec!["speed".into()],
        };
        let file = ingest_reader("c.csv".into(), "tick,speed\n9,8.5\n".as_bytes(), &aliases).unwrap();
        assert_eq!(file.samples, vec![Sample::new(9, 8.5)]);
    }
}
