use macroquad::prelude::*;

mod config;
mod feed;
mod issue;
mod physics;
mod pool;
mod renderer;
mod simulation;
mod spawn;
mod stats;
mod style;
mod ui;

use simulation::SimState;
use stats::{StatsSnapshot, VelocityStats};
use ui::UiState;

fn window_conf() -> Conf {
    Conf {
        window_title: "Ticketfall — issue tracker drop visualizer".to_string(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

const USAGE: &str = "usage: ticketfall [FEED] [--stats FILE] [--record] [--seed N]";

struct CliOptions {
    feed_path: String,
    stats_path: Option<String>,
    record: bool,
    seed: u64,
}

impl CliOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Self {
            feed_path: "issues.json".to_string(),
            stats_path: None,
            record: false,
            seed: 42,
        };
        let mut feed_given = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--stats" => {
                    options.stats_path =
                        Some(args.next().ok_or("--stats needs a file argument")?);
                }
                "--record" => options.record = true,
                "--seed" => {
                    let value = args.next().ok_or("--seed needs a number argument")?;
                    options.seed = value
                        .parse()
                        .map_err(|e| format!("bad --seed {value:?}: {e}"))?;
                }
                "--help" | "-h" => return Err(USAGE.to_string()),
                other if other.starts_with('-') => {
                    return Err(format!("unknown option {other:?}"));
                }
                other if !feed_given => {
                    options.feed_path = other.to_string();
                    feed_given = true;
                }
                other => return Err(format!("unexpected argument {other:?}")),
            }
        }

        if options.record && options.stats_path.is_none() {
            return Err("--record needs --stats FILE".to_string());
        }
        Ok(options)
    }
}

/// Resolve the throughput history and velocity estimate. The history file
/// (when given and non-empty) wins over the stats embedded in the feed;
/// velocity is recomputed from whichever history we ended up with, falling
/// back to the feed's own estimate.
fn resolve_history(
    options: &CliOptions,
    feed_stats: Vec<StatsSnapshot>,
    feed_velocity: Option<VelocityStats>,
    issues: &[issue::Issue],
) -> (Vec<StatsSnapshot>, Option<VelocityStats>) {
    let mut history = feed_stats;

    if let Some(path) = &options.stats_path {
        match stats::load_history(path) {
            Ok(loaded) if !loaded.is_empty() => history = loaded,
            Ok(_) => {}
            Err(e) => eprintln!("[TICKETFALL] Ignoring stats history: {e}"),
        }

        if options.record {
            let snapshot = StatsSnapshot::of_issues(issues);
            match stats::append_snapshot(path, &snapshot) {
                Ok(()) => {
                    eprintln!(
                        "[TICKETFALL] Recorded snapshot {} ({} todo / {} done)",
                        snapshot.checked_at, snapshot.todo_count, snapshot.done_count
                    );
                    history.push(snapshot);
                }
                Err(e) => eprintln!("[TICKETFALL] Snapshot not recorded: {e}"),
            }
        }
    }

    let velocity = match stats::velocity_from_history(&history) {
        Ok(velocity) => Some(velocity),
        Err(_) => feed_velocity,
    };
    (history, velocity)
}

#[macroquad::main(window_conf)]
async fn main() {
    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("[TICKETFALL] {message}");
            if message != USAGE {
                eprintln!("{USAGE}");
            }
            return;
        }
    };

    let feed = match feed::load_feed(&options.feed_path) {
        Ok(feed) => feed,
        Err(e) => {
            eprintln!("[TICKETFALL] Failed to load feed: {e}");
            return;
        }
    };
    eprintln!(
        "[TICKETFALL] Loaded {} issues from {}",
        feed.issues.len(),
        options.feed_path
    );

    let (history, velocity) =
        resolve_history(&options, feed.stats, feed.velocity_stats, &feed.issues);

    let mut sim = SimState::new(feed.issues, options.seed);
    let mut ui_state = UiState::default();
    let mut accumulator = 0.0f64;

    loop {
        let frame_time = get_frame_time() as f64;
        accumulator += frame_time.min(0.1);

        let effective_dt = config::FIXED_DT as f64 / sim.speed_multiplier as f64;
        if !sim.paused {
            while accumulator >= effective_dt {
                sim.tick();
                accumulator -= effective_dt;
            }
        } else {
            accumulator = 0.0;
        }

        let mut egui_wants_keyboard = false;
        egui_macroquad::cfg(|ctx| {
            egui_wants_keyboard = ctx.wants_keyboard_input();
        });
        if !egui_wants_keyboard {
            if is_key_pressed(KeyCode::Space) {
                sim.paused = !sim.paused;
            }
            if is_key_pressed(KeyCode::R) {
                ui_state.replay_requested = true;
            }
            if is_key_pressed(KeyCode::S) {
                ui_state.show_velocity = !ui_state.show_velocity;
            }
        }

        if ui_state.replay_requested {
            ui_state.replay_requested = false;
            sim.replay();
            eprintln!(
                "[TICKETFALL] Replaying drop sequence (seed {})",
                sim.seed()
            );
        }

        renderer::draw(&sim);
        ui::draw_ui(&mut sim, &mut ui_state, &history, velocity.as_ref());

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions, String> {
        CliOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_apply_with_no_arguments() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.feed_path, "issues.json");
        assert_eq!(options.stats_path, None);
        assert!(!options.record);
        assert_eq!(options.seed, 42);
    }

    #[test]
    fn full_argument_set_parses() {
        let options = parse(&["feed.json", "--stats", "stats", "--record", "--seed", "7"]).unwrap();
        assert_eq!(options.feed_path, "feed.json");
        assert_eq!(options.stats_path.as_deref(), Some("stats"));
        assert!(options.record);
        assert_eq!(options.seed, 7);
    }

    #[test]
    fn record_requires_a_stats_file() {
        assert!(parse(&["--record"]).is_err());
    }

    #[test]
    fn unknown_flags_and_extra_positionals_are_errors() {
        assert!(parse(&["--wat"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
        assert!(parse(&["--seed", "many"]).is_err());
        assert!(parse(&["--stats"]).is_err());
    }
}
