// All tunable visualization constants in one place.

// Canvas
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

// Pools (each pool is half the canvas; the Done pool sits 5px to the right)
pub const POOL_WIDTH: f32 = 400.0;
pub const POOL_HEIGHT: f32 = 600.0;
pub const POOL_GAP: f32 = 5.0;
pub const WALL_THICKNESS: f32 = 20.0;
pub const WALL_INSET: f32 = 10.0;
pub const SPAWN_MARGIN: f32 = 30.0;
pub const DROP_HEIGHT: f32 = 50.0;

// Drop scheduling
pub const FIRST_DROP_DELAY_MS: f64 = 100.0;
pub const DROP_INTERVAL_MS: f64 = 25.0;

// Tickets
pub const BUG_RADIUS: f32 = 10.0;
pub const TICKET_RADIUS: f32 = 15.0;
pub const TICKET_STROKE_WIDTH: f32 = 2.0;

// Physics (y-down screen coordinates, px/s²)
pub const GRAVITY: f32 = 981.0;
pub const SOLVER_ITERATIONS: usize = 40;
pub const TICKET_RESTITUTION: f32 = 0.3;
pub const TICKET_FRICTION: f32 = 0.5;

// Simulation
pub const FIXED_DT: f32 = 1.0 / 60.0;

// Stats panel: with more than HEAD + TAIL rows, show the first snapshot
// followed by the last TAIL.
pub const HISTORY_HEAD_ROWS: usize = 1;
pub const HISTORY_TAIL_ROWS: usize = 3;
