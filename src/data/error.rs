use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a whole directory load. Nothing is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Not a valid directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No CSV files found in directory: {}", .0.display())]
    NoCsvFiles(PathBuf),

    #[error("Cannot list directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single CSV file. The directory load carries on without it.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
