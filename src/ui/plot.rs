use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Clock-rate chart (central panel)
// ---------------------------------------------------------------------------

/// Render the clock-rate chart and remember where it was drawn.
pub fn clock_plot(ui: &mut Ui, state: &mut AppState) {
    if state.result.is_none() {
        state.chart_rect = None;
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select a directory to view clock rates  (File → Open Directory…)");
        });
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.chart_title());
    });

    let response = Plot::new("clock_plot")
        .legend(Legend::default())
        .x_axis_label("Time (Cycles)")
        .y_axis_label("Clock Rate (MHz)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in state.selected_series() {
                let points: PlotPoints = series.points.iter().copied().collect();
                let line = Line::new(points)
                    .name(&series.name)
                    .color(series.color)
                    .width(1.5);
                plot_ui.line(line);
            }
        });

    state.chart_rect = Some(response.response.rect);
}
