use macroquad::prelude::*;

use crate::config;

/// Which pool a ticket lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolId {
    Todo,
    Done,
}

impl PoolId {
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::Done => "Done",
        }
    }
}

/// One static slab of a pool (ground or wall), stored as center + half
/// extents so the physics colliders and the renderer share the same numbers.
#[derive(Clone, Copy, Debug)]
pub struct Slab {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Slab {
    fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }
}

/// An open-topped container: ground plus two walls, with the AABB of the
/// three slabs as its bounds.
pub struct Pool {
    slabs: [Slab; 3],
    bounds_min: Vec2,
    bounds_max: Vec2,
}

impl Pool {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let half_thickness = config::WALL_THICKNESS * 0.5;
        let ground = Slab {
            center: vec2(x + width * 0.5, y + height - config::WALL_INSET),
            half_extents: vec2(width * 0.5, half_thickness),
        };
        let left_wall = Slab {
            center: vec2(x + config::WALL_INSET, y + height * 0.5),
            half_extents: vec2(half_thickness, height * 0.5),
        };
        let right_wall = Slab {
            center: vec2(x + width - config::WALL_INSET, y + height * 0.5),
            half_extents: vec2(half_thickness, height * 0.5),
        };

        let slabs = [ground, left_wall, right_wall];
        let mut bounds_min = slabs[0].min();
        let mut bounds_max = slabs[0].max();
        for slab in &slabs[1..] {
            bounds_min = bounds_min.min(slab.min());
            bounds_max = bounds_max.max(slab.max());
        }

        Self {
            slabs,
            bounds_min,
            bounds_max,
        }
    }

    pub fn slabs(&self) -> &[Slab; 3] {
        &self.slabs
    }

    /// Horizontal band new tickets may spawn in.
    pub fn spawn_x_range(&self) -> (f32, f32) {
        (
            self.bounds_min.x + config::SPAWN_MARGIN,
            self.bounds_max.x - config::SPAWN_MARGIN,
        )
    }

    /// Height new tickets are released from.
    pub fn drop_y(&self) -> f32 {
        self.bounds_min.y + config::DROP_HEIGHT
    }
}
