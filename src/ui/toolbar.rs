use egui;

use super::UiState;
use crate::pool::PoolId;
use crate::simulation::SimState;

/// Slim status strip + compact controls.
pub fn draw_toolbar(ctx: &egui::Context, sim: &mut SimState, ui_state: &mut UiState) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(3.0);
        ui.horizontal_wrapped(|ui| {
            title_badge(ui, "TICKETFALL");

            ui.separator();
            compact_group(ui, "Sim", |ui| {
                let pause_label = if sim.paused { "Play" } else { "Pause" };
                if ui.button(pause_label).clicked() {
                    sim.paused = !sim.paused;
                }
                if ui.button("Replay").clicked() {
                    ui_state.replay_requested = true;
                }
            });

            compact_group(ui, "Speed", |ui| {
                for speed in [1.0, 2.0, 5.0] {
                    speed_button(ui, sim, speed);
                }
            });

            compact_group(ui, "Panels", |ui| {
                ui.toggle_value(&mut ui_state.show_velocity, "Velocity");
            });
        });

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            let (todo, done) = sim.pool_counts();
            metric_chip(ui, PoolId::Todo.label(), format!("{todo}"));
            metric_chip(ui, PoolId::Done.label(), format!("{done}"));
            if sim.pending_drops() > 0 {
                metric_chip(ui, "Queued", format!("{}", sim.pending_drops()));
            }
            metric_chip(ui, "Tick", format!("{}", sim.tick_count));
        });
        ui.add_space(3.0);
    });
}

fn speed_button(ui: &mut egui::Ui, sim: &mut SimState, speed: f32) {
    let label = format!("{speed}x");
    let selected = (sim.speed_multiplier - speed).abs() < 0.01;
    if ui.selectable_label(selected, label).clicked() {
        sim.speed_multiplier = speed;
    }
}

fn title_badge(ui: &mut egui::Ui, label: &str) {
    let text = egui::RichText::new(label)
        .strong()
        .color(egui::Color32::from_rgb(190, 220, 255));
    ui.label(text);
}

fn compact_group(ui: &mut egui::Ui, heading: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(heading)
                    .small()
                    .color(egui::Color32::from_rgb(150, 170, 185)),
            );
            add_contents(ui);
        });
    });
}

fn metric_chip(ui: &mut egui::Ui, key: &str, value: String) {
    let text = egui::RichText::new(format!("{key}: {value}"))
        .small()
        .color(egui::Color32::from_rgb(205, 215, 225));
    ui.group(|ui| {
        ui.label(text);
    });
}
