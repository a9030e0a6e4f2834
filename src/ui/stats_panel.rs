use egui;

use crate::stats::{self, StatsSnapshot, VelocityStats};

/// Throughput window: velocity estimate on top, snapshot rows below.
pub fn draw_stats_panel(
    ctx: &egui::Context,
    history: &[StatsSnapshot],
    velocity: Option<&VelocityStats>,
) {
    egui::Window::new("Velocity")
        .default_pos(egui::pos2(560.0, 60.0))
        .resizable(false)
        .show(ctx, |ui| {
            match velocity {
                Some(velocity) => {
                    labeled_value(ui, "Estimated done", &velocity.estimated_done_date);
                    labeled_value(ui, "Done per day", &format!("{:.2}", velocity.done_per_day));
                }
                None => {
                    ui.label(
                        egui::RichText::new("No throughput history recorded yet.")
                            .color(egui::Color32::from_gray(150)),
                    );
                }
            }

            if history.is_empty() {
                return;
            }

            ui.separator();
            egui::Grid::new("history_rows")
                .striped(true)
                .show(ui, |ui| {
                    header(ui, "Checked");
                    header(ui, "To Do");
                    header(ui, "Done");
                    ui.end_row();

                    for snapshot in stats::display_rows(history) {
                        ui.label(snapshot.checked_at.as_str());
                        ui.label(format!("{}", snapshot.todo_count));
                        ui.label(format!("{}", snapshot.done_count));
                        ui.end_row();
                    }
                });
        });
}

fn labeled_value(ui: &mut egui::Ui, key: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(key)
                .small()
                .color(egui::Color32::from_rgb(150, 170, 185)),
        );
        ui.label(egui::RichText::new(value).strong());
    });
}

fn header(ui: &mut egui::Ui, label: &str) {
    ui.label(egui::RichText::new(label).strong());
}
