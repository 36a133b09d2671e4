use std::fs;
use std::path::{Path, PathBuf};

use super::error::LoadError;
use super::labels::{LabelScheme, assign_labels};
use super::loader::{ColumnAliases, ingest_file};
use super::model::{FileDiagnostic, IngestedFile, LabeledBlock, ParsedResult};

/// Settings for one ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub aliases: ColumnAliases,
    pub label_scheme: LabelScheme,
}

/// List `*.csv` files (lower-case extension) directly inside `dir`,
/// sorted by file name.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(e) => Some(e.path()),
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {e}", dir.display());
                None
            }
        })
        .filter(|p| p.is_file())
        .filter(|p| p.extension().is_some_and(|e| e == "csv"))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Ingest every CSV in `dir`, rank them and attach labels.
///
/// A file that fails to parse is logged, recorded in
/// [`ParsedResult::diagnostics`] and left out; only directory-level
/// problems abort the load.
pub fn load_directory(dir: &Path, options: &LoadOptions) -> Result<ParsedResult, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let paths = csv_files(dir)?;
    if paths.is_empty() {
        return Err(LoadError::NoCsvFiles(dir.to_path_buf()));
    }

    let mut ingested: Vec<IngestedFile> = Vec::with_capacity(paths.len());
    let mut diagnostics = Vec::new();
    for path in &paths {
        match ingest_file(path, &options.aliases) {
            Ok(file) => ingested.push(file),
            Err(e) => {
                log::warn!("Error parsing file: {e}");
                diagnostics.push(FileDiagnostic {
                    file_name: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    message: e.to_string(),
                });
            }
        }
    }

    let file_label_map = assign_labels(&ingested, options.label_scheme);

    let blocks: Vec<LabeledBlock> = ingested
        .into_iter()
        .filter_map(|file| {
            let label = file_label_map.get(&file.file_name)?.clone();
            Some(LabeledBlock::from_ingested(file, label))
        })
        .collect();

    log::info!(
        "Loaded {} RAM blocks from {} ({} skipped)",
        blocks.len(),
        dir.display(),
        diagnostics.len()
    );

    Ok(ParsedResult {
        blocks,
        file_label_map,
        diagnostics,
    })
}
