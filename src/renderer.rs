use macroquad::prelude::*;

use crate::config;
use crate::pool::{Pool, PoolId};
use crate::simulation::SimState;
use crate::style;

const BG_COLOR: Color = Color::new(0.08, 0.08, 0.12, 1.0);

/// Draw the whole scene: pools, tickets, HUD.
pub fn draw(sim: &SimState) {
    clear_background(BG_COLOR);

    draw_pool(&sim.todo_pool);
    draw_pool(&sim.done_pool);
    draw_tickets(sim);
    draw_hud(sim);
}

fn draw_pool(pool: &Pool) {
    for slab in pool.slabs() {
        let top_left = slab.center - slab.half_extents;
        let size = slab.half_extents * 2.0;
        draw_rectangle(top_left.x, top_left.y, size.x, size.y, style::wall_color());
    }
}

fn draw_tickets(sim: &SimState) {
    for ticket in &sim.tickets {
        let Some(pos) = sim.physics.body_position(ticket.body) else {
            continue;
        };
        let radius = style::radius_for(ticket.issue.kind);
        draw_circle(pos.x, pos.y, radius, style::fill_color(&ticket.issue));
        draw_circle_lines(
            pos.x,
            pos.y,
            radius,
            config::TICKET_STROKE_WIDTH,
            style::stroke_color(),
        );
    }
}

fn draw_hud(sim: &SimState) {
    let tc = Color::new(0.7, 0.75, 0.8, 1.0);
    let sh = Color::new(0.0, 0.0, 0.0, 0.5);
    let (todo, done) = sim.pool_counts();

    let fps_text = format!("FPS: {}", get_fps());
    draw_text(&fps_text, 11.0, 21.0, 18.0, sh);
    draw_text(&fps_text, 10.0, 20.0, 18.0, tc);

    let todo_text = format!("{}: {todo}", PoolId::Todo.label());
    draw_text(&todo_text, 11.0, 41.0, 18.0, sh);
    draw_text(&todo_text, 10.0, 40.0, 18.0, tc);

    let done_text = format!("{}: {done}", PoolId::Done.label());
    draw_text(&done_text, 11.0, 61.0, 18.0, sh);
    draw_text(&done_text, 10.0, 60.0, 18.0, tc);

    if sim.pending_drops() > 0 {
        let queued_text = format!("Queued: {}", sim.pending_drops());
        draw_text(&queued_text, 11.0, 81.0, 18.0, sh);
        draw_text(&queued_text, 10.0, 80.0, 18.0, tc);
    }

    if sim.paused {
        let pause_text = "PAUSED (Space to resume)";
        let tw = measure_text(pause_text, None, 24, 1.0).width;
        let x = screen_width() * 0.5 - tw * 0.5;
        draw_text(pause_text, x + 1.0, 31.0, 24.0, sh);
        draw_text(pause_text, x, 30.0, 24.0, Color::new(1.0, 0.8, 0.2, 0.9));
    }
}
