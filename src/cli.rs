use std::path::PathBuf;

use clap::Parser;

use crate::data::labels::LabelScheme;
use crate::data::pipeline::LoadOptions;

/// Visualise RAM block clock rates from a directory of CSV files.
#[derive(Debug, Parser)]
#[command(name = "ram-clocker", version, about)]
pub struct Cli {
    /// Directory of clocking CSVs to load on startup.
    pub directory: Option<PathBuf>,

    /// How ranks are turned into block labels.
    #[arg(long, value_enum, default_value_t = LabelScheme::Spreadsheet)]
    pub label_scheme: LabelScheme,

    /// Where "Load Sample" writes and reads demo data.
    #[arg(long, default_value = "sample_data")]
    pub sample_dir: PathBuf,
}

impl Cli {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            label_scheme: self.label_scheme,
            ..LoadOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["ram-clocker"]);
        assert_eq!(cli.directory, None);
        assert_eq!(cli.label_scheme, LabelScheme::Spreadsheet);
        assert_eq!(cli.sample_dir, PathBuf::from("sample_data"));
    }

    #[test]
    fn directory_and_legacy_labels() {
        let cli = Cli::parse_from(["ram-clocker", "/data/run1", "--label-scheme", "legacy"]);
        assert_eq!(cli.directory, Some(PathBuf::from("/data/run1")));
        assert_eq!(cli.load_options().label_scheme, LabelScheme::Legacy);
    }
}
