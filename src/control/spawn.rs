use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::{CLASSIC_SPAWN_Y, SPAWN_EDGE_INSET, SPAWN_MAX_SPEED, SPAWN_MIN_SPEED};
use crate::control::{environment::Environment, rocket::RocketState};
use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Same place every time, at rest.
    Fixed { x: f64, y: f64 },
    /// Left, right or top edge, drifting toward the pad.
    RandomEdge { min_speed: f64, max_speed: f64 },
}

impl SpawnPolicy {
    pub fn top_center(environment: &Environment) -> Self {
        SpawnPolicy::Fixed {
            x: environment.width / 2.0,
            y: CLASSIC_SPAWN_Y,
        }
    }

    pub fn random_edge() -> Self {
        SpawnPolicy::RandomEdge {
            min_speed: SPAWN_MIN_SPEED,
            max_speed: SPAWN_MAX_SPEED,
        }
    }

    /// Edge spawns need room for the inset on every edge they can pick.
    pub fn validate(&self, environment: &Environment) -> Result<(), SimulationError> {
        let SpawnPolicy::RandomEdge {
            min_speed,
            max_speed,
        } = *self
        else {
            return Ok(());
        };
        if !(0.0 <= min_speed && min_speed <= max_speed) {
            return Err(SimulationError::InvalidSpawn(format!(
                "speed range must satisfy 0 <= min <= max, got [{min_speed}, {max_speed}]"
            )));
        }
        if environment.height / 2.0 < SPAWN_EDGE_INSET
            || environment.width < 2.0 * SPAWN_EDGE_INSET
        {
            return Err(SimulationError::InvalidSpawn(format!(
                "arena {}x{} is too small for edge spawns inset by {SPAWN_EDGE_INSET}",
                environment.width, environment.height
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
}

/// Produces fresh rockets. Owns the only randomness in the simulation.
#[derive(Debug, Clone)]
pub struct Spawner {
    policy: SpawnPolicy,
    rng: StdRng,
}

impl Spawner {
    pub fn new(policy: SpawnPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Spawner { policy, rng }
    }

    pub fn policy(&self) -> SpawnPolicy {
        self.policy
    }

    pub fn spawn(&mut self, environment: &Environment) -> RocketState {
        let fuel = environment.fuel.capacity();
        match self.policy {
            SpawnPolicy::Fixed { x, y } => RocketState::at_rest(Vector2D::new(x, y), fuel),
            SpawnPolicy::RandomEdge {
                min_speed,
                max_speed,
            } => {
                let edge = match self.rng.gen_range(0..3) {
                    0 => SpawnEdge::Left,
                    1 => SpawnEdge::Right,
                    _ => SpawnEdge::Top,
                };
                let position = self.edge_position(edge, environment);
                let (target_x, target_y) = environment.target();
                let aim = Vector2D::new(target_x, target_y) - position;
                let distance = match aim.magnitude() {
                    d if d == 0.0 => 1.0,
                    d => d,
                };
                let speed = if min_speed < max_speed {
                    self.rng.gen_range(min_speed..=max_speed)
                } else {
                    min_speed
                };

                let mut state = RocketState::at_rest(position, fuel);
                state.velocity = aim * (speed / distance);
                tracing::debug!(?edge, x = position.x, y = position.y, speed, "spawned rocket");
                state
            }
        }
    }

    fn edge_position(&mut self, edge: SpawnEdge, environment: &Environment) -> Vector2D {
        match edge {
            SpawnEdge::Left => Vector2D::new(
                0.0,
                self.sample_span(SPAWN_EDGE_INSET, environment.height / 2.0),
            ),
            SpawnEdge::Right => Vector2D::new(
                environment.width,
                self.sample_span(SPAWN_EDGE_INSET, environment.height / 2.0),
            ),
            SpawnEdge::Top => Vector2D::new(
                self.sample_span(SPAWN_EDGE_INSET, environment.width - SPAWN_EDGE_INSET),
                0.0,
            ),
        }
    }

    // Collapsed spans fall back to their midpoint.
    fn sample_span(&mut self, low: f64, high: f64) -> f64 {
        if low < high {
            self.rng.gen_range(low..=high)
        } else {
            (low + high) / 2.0
        }
    }
}
