//! Thin wrapper over the rapier2d pipeline. All simulation (gravity,
//! collision, rigid bodies) happens inside the engine; this module only
//! owns its state and adapts coordinates.

use macroquad::prelude::{vec2, Vec2};
use rapier2d::prelude::*;

use crate::config;

fn to_na(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

fn to_vec2(v: &Vector<Real>) -> Vec2 {
    vec2(v.x, v.y)
}

/// Owns the full set of rapier structures needed to step a world.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// New world with the given gravity. Screen coordinates are y-down, so
    /// downward gravity is positive y.
    pub fn new(gravity: Vec2) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        if let Some(iterations) = std::num::NonZeroUsize::new(config::SOLVER_ITERATIONS) {
            integration_parameters.num_solver_iterations = iterations;
        }

        Self {
            gravity: to_na(gravity),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Insert a static slab (pool ground or wall). No rigid body needed;
    /// a standalone collider is fixed by construction.
    pub fn add_slab(&mut self, center: Vec2, half_extents: Vec2) {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            .translation(to_na(center))
            .build();
        self.colliders.insert(collider);
    }

    /// Insert a dynamic ball and return its body handle.
    pub fn add_ball(&mut self, pos: Vec2, radius: f32) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic().translation(to_na(pos)).build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::ball(radius)
            .restitution(config::TICKET_RESTITUTION)
            .friction(config::TICKET_FRICTION)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Advance the engine by one fixed step.
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.bodies.get(handle).map(|body| to_vec2(body.translation()))
    }

    #[cfg(test)]
    fn body_velocity(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.bodies.get(handle).map(|body| to_vec2(body.linvel()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_dropped_ball_settles_on_a_slab() {
        let mut world = PhysicsWorld::new(vec2(0.0, config::GRAVITY));
        // 400-wide floor whose top surface sits at y = 580
        world.add_slab(vec2(200.0, 590.0), vec2(200.0, 10.0));
        let ball = world.add_ball(vec2(200.0, 50.0), 10.0);

        for _ in 0..600 {
            world.step(config::FIXED_DT);
        }

        let pos = world.body_position(ball).unwrap();
        let vel = world.body_velocity(ball).unwrap();
        // Resting on the floor: center one radius above the surface, not moving.
        assert!((pos.y - 570.0).abs() < 5.0, "ball at {pos:?}");
        assert!((pos.x - 200.0).abs() < 1.0, "ball drifted to {pos:?}");
        assert!(vel.length() < 5.0, "ball still moving at {vel:?}");
    }

    #[test]
    fn walls_keep_balls_inside_the_pool() {
        let mut world = PhysicsWorld::new(vec2(0.0, config::GRAVITY));
        world.add_slab(vec2(200.0, 590.0), vec2(200.0, 10.0));
        world.add_slab(vec2(10.0, 300.0), vec2(10.0, 300.0));
        world.add_slab(vec2(390.0, 300.0), vec2(10.0, 300.0));

        let near_wall = world.add_ball(vec2(35.0, 50.0), 15.0);
        for _ in 0..900 {
            world.step(config::FIXED_DT);
        }

        let pos = world.body_position(near_wall).unwrap();
        assert!(pos.x > 20.0 && pos.x < 380.0, "escaped the pool: {pos:?}");
        assert!(pos.y < 585.0, "fell through the ground: {pos:?}");
    }

    #[test]
    fn unknown_handles_query_as_none() {
        let mut world = PhysicsWorld::new(vec2(0.0, config::GRAVITY));
        let handle = world.add_ball(vec2(0.0, 0.0), 10.0);
        let other = PhysicsWorld::new(vec2(0.0, config::GRAVITY));
        assert!(other.body_position(handle).is_none());
        assert!(world.body_position(handle).is_some());
    }
}
