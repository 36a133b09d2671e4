use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use eframe::egui::{ColorImage, Rect};

use crate::data::labels::compare_labels;
use crate::data::model::ParsedResult;
use crate::data::pipeline::{LoadOptions, load_directory};
use crate::data::sample::write_sample_data;
use crate::data::series::{PlotSeries, plot_series};
use crate::export::{crop_to_chart, png_path, save_png};

pub const APP_TITLE: &str = "RAM Block Clocking Visualizer";

// ---------------------------------------------------------------------------
// User-facing messages
// ---------------------------------------------------------------------------

/// A message shown in a small modal window until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    fn info(title: &str, text: impl Into<String>) -> Self {
        Notice {
            title: title.to_string(),
            text: text.into(),
            is_error: false,
        }
    }

    fn error(title: &str, text: impl Into<String>) -> Self {
        Notice {
            title: title.to_string(),
            text: text.into(),
            is_error: true,
        }
    }
}

/// One line of the file → block mapping panel.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingRow {
    pub file_name: String,
    pub label: String,
    pub average_mhz: f64,
    pub range_mhz: f64,
}

impl MappingRow {
    /// `"<file> → RAM Block <label> (Avg: x MHz, Range: y MHz)"`
    pub fn describe(&self) -> String {
        format!(
            "{} → RAM Block {} (Avg: {:.2} MHz, Range: {:.2} MHz)",
            self.file_name, self.label, self.average_mhz, self.range_mhz
        )
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Result of the most recent successful load.
    pub result: Option<ParsedResult>,

    /// Labels whose checkbox is ticked.
    pub selected: BTreeSet<String>,

    /// Series currently drawn (rebuilt by [`AppState::refresh`]).
    pub series: Vec<PlotSeries>,

    pub options: LoadOptions,
    pub sample_dir: PathBuf,

    /// Name of the loaded directory, shown in the window title.
    pub source_name: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Modal message awaiting dismissal.
    pub notice: Option<Notice>,

    /// Chart area from the last frame, in points.
    pub chart_rect: Option<Rect>,

    /// Destination of a requested PNG export.
    pub pending_export: Option<PathBuf>,

    /// Whether a screenshot for `pending_export` has been requested.
    pub capture_in_flight: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LoadOptions::default(), PathBuf::from("sample_data"))
    }
}

impl AppState {
    pub fn new(options: LoadOptions, sample_dir: PathBuf) -> Self {
        Self {
            result: None,
            selected: BTreeSet::new(),
            series: Vec::new(),
            options,
            sample_dir,
            source_name: None,
            status_message: None,
            notice: None,
            chart_rect: None,
            pending_export: None,
            capture_in_flight: false,
        }
    }

    pub fn window_title(&self) -> String {
        match &self.source_name {
            Some(name) => format!("{APP_TITLE} - {name}"),
            None => APP_TITLE.to_string(),
        }
    }

    pub fn chart_title(&self) -> String {
        if self.series.is_empty() {
            "RAM Block Clock Rates - No Data Selected".to_string()
        } else {
            format!(
                "RAM Block Clock Rates - Selected Blocks: {}",
                self.selected.len()
            )
        }
    }

    // -- loading --

    /// Validate a startup path before loading it. Non-directories are
    /// skipped with a status message.
    pub fn load_startup_directory(&mut self, dir: &Path) {
        if dir.is_dir() {
            self.load_directory(dir);
        } else {
            log::warn!("Invalid directory: {}", dir.display());
            self.status_message = Some(format!("Invalid directory: {}", dir.display()));
        }
    }

    /// Run the pipeline over `dir` and, on success, replace the current
    /// result. Returns whether the load succeeded.
    pub fn load_directory(&mut self, dir: &Path) -> bool {
        match load_directory(dir, &self.options) {
            Ok(result) => {
                let name = dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dir.display().to_string());
                self.set_result(result, name);

                let loaded = self.result.as_ref().map(ParsedResult::len).unwrap_or(0);
                let files = self.result.as_ref().map(|r| r.file_label_map.len()).unwrap_or(0);
                let mut text = format!(
                    "Loaded {loaded} RAM blocks from {files} files:\n{}",
                    self.mapping_summary()
                );
                text.push_str(&self.skipped_summary());
                self.notice = Some(Notice::info("Data Loaded", text));
                true
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", dir.display());
                self.status_message = Some(format!("Error: {e}"));
                self.notice = Some(Notice::error("Error", format!("Error loading data: {e}")));
                false
            }
        }
    }

    /// Install a freshly parsed result. Every block starts selected.
    pub fn set_result(&mut self, result: ParsedResult, source_name: String) {
        self.selected = result.sorted_labels().into_iter().collect();
        self.status_message = if result.diagnostics.is_empty() {
            None
        } else {
            Some(format!("{} file(s) skipped", result.diagnostics.len()))
        };
        self.result = Some(result);
        self.source_name = Some(source_name);
        self.refresh();
    }

    /// Generate demo CSVs when missing, then load them.
    pub fn load_sample_data(&mut self) {
        if !self.sample_dir.is_dir() {
            if let Err(e) = write_sample_data(&self.sample_dir) {
                log::error!("Failed to create sample data: {e:#}");
                self.notice = Some(Notice::error(
                    "Error",
                    format!("Error loading sample data: {e:#}"),
                ));
                return;
            }
        }
        let dir = self.sample_dir.clone();
        if self.load_directory(&dir) {
            self.source_name = Some("Sample Data".to_string());
        }
    }

    // -- selection --

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.contains(label)
    }

    pub fn set_selected(&mut self, label: &str, selected: bool) {
        if selected {
            self.selected.insert(label.to_string());
        } else {
            self.selected.remove(label);
        }
        self.refresh();
    }

    pub fn toggle_block(&mut self, label: &str) {
        let now = !self.is_selected(label);
        self.set_selected(label, now);
    }

    /// Tick or untick every checkbox.
    pub fn select_all(&mut self, select: bool) {
        self.selected = match (&self.result, select) {
            (Some(result), true) => result.sorted_labels().into_iter().collect(),
            _ => BTreeSet::new(),
        };
        self.refresh();
    }

    /// Series for the ticked blocks, as last rebuilt.
    pub fn selected_series(&self) -> &[PlotSeries] {
        &self.series
    }

    /// Rebuild the plotted series from the current selection.
    pub fn refresh(&mut self) {
        self.series = match &self.result {
            Some(result) => plot_series(&result.blocks, &self.selected),
            None => Vec::new(),
        };
    }

    // -- mapping panel --

    /// File → block rows ordered by label rank.
    pub fn mapping_rows(&self) -> Vec<MappingRow> {
        let Some(result) = &self.result else {
            return Vec::new();
        };
        let mut rows: Vec<MappingRow> = result
            .blocks
            .iter()
            .map(|b| MappingRow {
                file_name: b.source_file_name.clone(),
                label: b.block_name.clone(),
                average_mhz: b.stats.average(),
                range_mhz: b.stats.range(),
            })
            .collect();
        rows.sort_by(|a, b| {
            compare_labels(&a.label, &b.label).then_with(|| a.file_name.cmp(&b.file_name))
        });
        rows
    }

    /// Text form of [`AppState::mapping_rows`], one line per file.
    pub fn mapping_lines(&self) -> Vec<String> {
        self.mapping_rows().iter().map(MappingRow::describe).collect()
    }

    /// Text form of the mapping used in the "Data Loaded" notice.
    pub fn mapping_summary(&self) -> String {
        self.mapping_rows()
            .iter()
            .map(|r| format!("  • {} → {}\n", r.file_name, r.label))
            .collect()
    }

    /// Skipped files with their errors, empty when nothing was skipped.
    pub fn skipped_summary(&self) -> String {
        let Some(result) = &self.result else {
            return String::new();
        };
        if result.diagnostics.is_empty() {
            return String::new();
        }
        let mut out = format!("\nSkipped {} file(s):\n", result.diagnostics.len());
        for d in &result.diagnostics {
            out.push_str(&format!("  • {}: {}\n", d.file_name, d.message));
        }
        out
    }

    // -- export --

    /// Queue a PNG export. The capture happens on the next frame.
    pub fn request_export(&mut self, path: &Path) {
        if self.result.is_none() {
            self.notice = Some(Notice::error(
                "Export Error",
                "No visualization to export. Load data first.",
            ));
            return;
        }
        self.pending_export = Some(png_path(path));
        self.capture_in_flight = false;
    }

    /// Save a window screenshot for the pending export, cropped to the chart.
    pub fn finish_export(&mut self, screenshot: &ColorImage, pixels_per_point: f32) {
        self.capture_in_flight = false;
        let Some(path) = self.pending_export.take() else {
            return;
        };

        let saved = match self.chart_rect {
            Some(rect) => crop_to_chart(screenshot, rect, pixels_per_point)
                .and_then(|capture| save_png(&capture, &path)),
            None => save_png(screenshot, &path),
        };

        self.notice = Some(match saved {
            Ok(saved) => {
                log::info!("Chart exported to {}", saved.display());
                Notice::info(
                    "Export Successful",
                    format!("Chart saved successfully to:\n{}", saved.display()),
                )
            }
            Err(e) => {
                log::error!("Chart export to {} failed: {e}", path.display());
                Notice::error("Export Error", format!("Error saving chart: {e}"))
            }
        });
    }
}
