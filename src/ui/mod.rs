pub mod stats_panel;
pub mod toolbar;

use crate::simulation::SimState;
use crate::stats::{StatsSnapshot, VelocityStats};

/// Tracks which UI panels are open and pending toolbar actions.
pub struct UiState {
    pub show_velocity: bool,
    pub replay_requested: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_velocity: true,
            replay_requested: false,
        }
    }
}

/// Draw all egui UI panels.
pub fn draw_ui(
    sim: &mut SimState,
    ui_state: &mut UiState,
    history: &[StatsSnapshot],
    velocity: Option<&VelocityStats>,
) {
    egui_macroquad::ui(|ctx| {
        toolbar::draw_toolbar(ctx, sim, ui_state);

        if ui_state.show_velocity {
            stats_panel::draw_stats_panel(ctx, history, velocity);
        }
    });

    egui_macroquad::draw();
}
