use eframe::egui::{self, Color32, RichText, ScrollArea, Ui, ViewportCommand};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – block checkboxes
// ---------------------------------------------------------------------------

/// Render the left block filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("RAM Blocks");
    ui.separator();

    let labels = match &state.result {
        Some(result) if !result.is_empty() => result.sorted_labels(),
        _ => {
            ui.label("No data loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for label in &labels {
                let mut checked = state.is_selected(label);
                if ui.checkbox(&mut checked, label.as_str()).changed() {
                    state.set_selected(label, checked);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Right side panel – controls
// ---------------------------------------------------------------------------

/// Render the control buttons.
pub fn control_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let full_width = |ui: &mut Ui, text: &str| {
        ui.add_sized([ui.available_width(), 24.0], egui::Button::new(text))
            .clicked()
    };

    ui.add_space(10.0);
    if full_width(ui, "Select Input Directory") {
        open_directory_dialog(state);
    }
    ui.add_space(10.0);
    if full_width(ui, "Load Sample") {
        state.load_sample_data();
    }

    ui.add_space(20.0);
    if full_width(ui, "Select All") {
        state.select_all(true);
    }
    ui.add_space(5.0);
    if full_width(ui, "Deselect All") {
        state.select_all(false);
    }

    ui.add_space(20.0);
    if full_width(ui, "Refresh Visualization") {
        state.refresh();
    }

    ui.add_space(20.0);
    if full_width(ui, "Export Chart") {
        export_dialog(state);
    }
}

// ---------------------------------------------------------------------------
// Bottom panel – file → block mapping
// ---------------------------------------------------------------------------

pub fn mapping_panel(ui: &mut Ui, state: &AppState) {
    ui.strong("File to Block Name Mapping");

    let rows = state.mapping_rows();
    if rows.is_empty() {
        ui.label("No files loaded; please select a directory.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(200.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(120.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("File");
            });
            header.col(|ui| {
                ui.strong("RAM Block");
            });
            header.col(|ui| {
                ui.strong("Avg (MHz)");
            });
            header.col(|ui| {
                ui.strong("Range (MHz)");
            });
        })
        .body(|mut body| {
            for row in &rows {
                body.row(18.0, |mut tr| {
                    tr.col(|ui| {
                        ui.label(&row.file_name).on_hover_text(row.describe());
                    });
                    tr.col(|ui| {
                        ui.label(&row.label);
                    });
                    tr.col(|ui| {
                        ui.label(format!("{:.2}", row.average_mhz));
                    });
                    tr.col(|ui| {
                        ui.label(format!("{:.2}", row.range_mhz));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open Directory…").clicked() {
                open_directory_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                ui.ctx().send_viewport_cmd(ViewportCommand::Close);
            }
        });

        ui.separator();

        if let Some(result) = &state.result {
            ui.label(format!(
                "{} blocks loaded, {} visible",
                result.len(),
                state.series.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Notice window
// ---------------------------------------------------------------------------

/// Show the pending notice, if any, until the user presses OK.
pub fn notice_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = &state.notice else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(&notice.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            let text = RichText::new(&notice.text);
            ui.label(if notice.is_error {
                text.color(Color32::RED)
            } else {
                text
            });
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        state.notice = None;
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_directory_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Select Directory with RAM Clocking Data")
        .pick_folder();

    if let Some(dir) = dir {
        state.load_directory(&dir);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save Chart As Image")
        .add_filter("PNG Image Files", &["png"])
        .set_file_name("ram_clocking_chart.png")
        .save_file();

    if let Some(path) = file {
        state.request_export(&path);
    }
}
