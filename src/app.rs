use eframe::egui::{self, ViewportCommand};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RamClockerApp {
    pub state: AppState,
    shown_title: String,
}

impl RamClockerApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            shown_title: String::new(),
        }
    }

    /// Ask for a screenshot when an export is queued, and save it when it
    /// arrives.
    fn drive_export(&mut self, ctx: &egui::Context) {
        let screenshot = ctx.input(|i| {
            i.raw.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        if let Some(image) = screenshot {
            self.state.finish_export(&image, ctx.pixels_per_point());
        }

        if self.state.pending_export.is_some() && !self.state.capture_in_flight {
            self.state.capture_in_flight = true;
            ctx.send_viewport_cmd(ViewportCommand::Screenshot(egui::UserData::default()));
        }
    }
}

impl Default for RamClockerApp {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl eframe::App for RamClockerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: file mapping ----
        egui::TopBottomPanel::bottom("mapping_panel")
            .default_height(120.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::mapping_panel(ui, &self.state);
            });

        // ---- Left side panel: block checkboxes ----
        egui::SidePanel::left("block_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: controls ----
        egui::SidePanel::right("control_panel")
            .default_width(200.0)
            .resizable(false)
            .show(ctx, |ui| {
                panels::control_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::clock_plot(ui, &mut self.state);
        });

        panels::notice_window(ctx, &mut self.state);
        self.drive_export(ctx);

        let title = self.state.window_title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }
}
