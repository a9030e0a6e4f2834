use macroquad::prelude::*;
use ::rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rapier2d::prelude::RigidBodyHandle;

use crate::config;
use crate::issue::Issue;
use crate::physics::PhysicsWorld;
use crate::pool::{Pool, PoolId};
use crate::spawn::DropSchedule;
use crate::style;

/// A spawned ticket: the issue record plus its rigid body in the engine.
pub struct Ticket {
    pub issue: Issue,
    pub body: RigidBodyHandle,
}

pub struct SimState {
    pub physics: PhysicsWorld,
    pub todo_pool: Pool,
    pub done_pool: Pool,
    pub schedule: DropSchedule,
    pub tickets: Vec<Ticket>,
    pub clock_ms: f64,
    pub tick_count: u64,
    pub paused: bool,
    pub speed_multiplier: f32,
    issues: Vec<Issue>,
    rng: ChaCha8Rng,
    seed: u64,
}

impl SimState {
    pub fn new(issues: Vec<Issue>, seed: u64) -> Self {
        let todo_pool = Pool::new(0.0, 0.0, config::POOL_WIDTH, config::POOL_HEIGHT);
        let done_pool = Pool::new(
            config::POOL_WIDTH + config::POOL_GAP,
            0.0,
            config::POOL_WIDTH,
            config::POOL_HEIGHT,
        );

        let mut physics = PhysicsWorld::new(vec2(0.0, config::GRAVITY));
        for slab in todo_pool.slabs().iter().chain(done_pool.slabs().iter()) {
            physics.add_slab(slab.center, slab.half_extents);
        }

        let schedule = DropSchedule::build(&issues);

        Self {
            physics,
            todo_pool,
            done_pool,
            schedule,
            tickets: Vec::with_capacity(issues.len()),
            clock_ms: 0.0,
            tick_count: 0,
            paused: false,
            speed_multiplier: 1.0,
            issues,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn pool(&self, id: PoolId) -> &Pool {
        match id {
            PoolId::Todo => &self.todo_pool,
            PoolId::Done => &self.done_pool,
        }
    }

    /// One fixed step: advance the drop clock, release due tickets into the
    /// engine, step the engine.
    pub fn tick(&mut self) {
        let dt = config::FIXED_DT;
        self.clock_ms += dt as f64 * 1000.0;

        for event in self.schedule.drain_due(self.clock_ms) {
            self.drop_ticket(event.issue, event.pool);
        }

        self.physics.step(dt);
        self.tick_count += 1;
    }

    fn drop_ticket(&mut self, issue: Issue, pool: PoolId) {
        let (x_min, x_max) = self.pool(pool).spawn_x_range();
        let drop_y = self.pool(pool).drop_y();
        let x = self.rng.gen_range(x_min..x_max);

        let radius = style::radius_for(issue.kind);
        let body = self.physics.add_ball(vec2(x, drop_y), radius);
        self.tickets.push(Ticket { issue, body });
    }

    /// Rebuild the world and re-run the drop sequence from the same seed.
    pub fn replay(&mut self) {
        let speed_multiplier = self.speed_multiplier;
        let issues = std::mem::take(&mut self.issues);
        *self = Self::new(issues, self.seed);
        self.speed_multiplier = speed_multiplier;
    }

    /// Spawned tickets per pool bucket (open work counts toward To Do).
    pub fn pool_counts(&self) -> (usize, usize) {
        let todo = self
            .tickets
            .iter()
            .filter(|t| t.issue.status.is_open())
            .count();
        (todo, self.tickets.len() - todo)
    }

    pub fn pending_drops(&self) -> usize {
        self.schedule.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{IssueStatus, IssueType, Priority};

    fn issue(id: &str, status: IssueStatus) -> Issue {
        Issue {
            id: id.to_string(),
            status,
            kind: IssueType::Bug,
            priority: Priority::High,
        }
    }

    fn sample_issues() -> Vec<Issue> {
        vec![
            issue("T-1", IssueStatus::ToDo),
            issue("P-1", IssueStatus::InProgress),
            issue("D-1", IssueStatus::Done),
        ]
    }

    #[test]
    fn tickets_spawn_as_the_clock_passes_their_slot() {
        let mut sim = SimState::new(sample_issues(), 7);
        assert_eq!(sim.tickets.len(), 0);

        // 7 ticks at 60Hz is ~117ms: past the 100ms slots, short of 125ms.
        for _ in 0..7 {
            sim.tick();
        }
        assert_eq!(sim.tickets.len(), 2);

        // Two more ticks reach 150ms and release the In Progress drop.
        for _ in 0..2 {
            sim.tick();
        }
        assert_eq!(sim.tickets.len(), 3);
        assert!(sim.schedule.is_empty());
    }

    #[test]
    fn spawned_tickets_start_inside_their_pool_band() {
        let mut sim = SimState::new(sample_issues(), 7);
        for _ in 0..20 {
            sim.tick();
        }

        for ticket in &sim.tickets {
            let pos = sim.physics.body_position(ticket.body).unwrap();
            if ticket.issue.status == IssueStatus::Done {
                assert!(pos.x >= 435.0 && pos.x <= 775.0, "done ticket at {pos:?}");
            } else {
                assert!(pos.x >= 30.0 && pos.x <= 370.0, "open ticket at {pos:?}");
            }
        }
    }

    #[test]
    fn replay_is_deterministic_for_a_seed() {
        let mut first = SimState::new(sample_issues(), 42);
        for _ in 0..30 {
            first.tick();
        }
        let positions = |sim: &SimState| -> Vec<Vec2> {
            sim.tickets
                .iter()
                .filter_map(|t| sim.physics.body_position(t.body))
                .collect()
        };
        let before = positions(&first);

        first.replay();
        assert_eq!(first.tickets.len(), 0);
        assert_eq!(first.clock_ms, 0.0);
        for _ in 0..30 {
            first.tick();
        }
        assert_eq!(positions(&first), before);
    }

    #[test]
    fn pool_counts_track_status_buckets() {
        let mut sim = SimState::new(sample_issues(), 7);
        for _ in 0..20 {
            sim.tick();
        }
        assert_eq!(sim.pool_counts(), (2, 1));
        assert_eq!(sim.pending_drops(), 0);
    }
}
