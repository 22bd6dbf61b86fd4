use std::fmt;

use crate::{
    trajectory_system::{kinematics, landing},
    utils::vector2d::Vector2D,
};

use super::{
    environment::Environment,
    input::ControlInput,
    spawn::{SpawnPolicy, Spawner},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashReason {
    OutOfBounds,
    MissedPad,
    Speed,
    Angle,
    AngularVelocity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Flying,
    Landed,
    Crashed(CrashReason),
}

impl FlightStatus {
    pub fn is_flying(&self) -> bool {
        matches!(self, FlightStatus::Flying)
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlightStatus::Flying => "Flying",
            FlightStatus::Landed => "Landed Successfully",
            FlightStatus::Crashed(CrashReason::OutOfBounds) => "Crashed (Out of bounds)",
            FlightStatus::Crashed(CrashReason::Speed) => "Crashed (speed)",
            FlightStatus::Crashed(CrashReason::Angle) => "Crashed (angle)",
            FlightStatus::Crashed(CrashReason::AngularVelocity) => "Crashed (rotation)",
            FlightStatus::Crashed(CrashReason::MissedPad) => "Crashed",
        };
        f.write_str(label)
    }
}

/// Kinematic state of the one rocket in play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketState {
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Degrees, 0 is nose up, positive leans right.
    pub angle: f64,
    /// Degrees per tick.
    pub angular_velocity: f64,
    pub fuel: f64,
    pub status: FlightStatus,
}

impl RocketState {
    pub fn at_rest(position: Vector2D, fuel: f64) -> Self {
        RocketState {
            position,
            velocity: Vector2D::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            fuel,
            status: FlightStatus::Flying,
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

/// One integrator step followed by touchdown and bounds evaluation.
pub fn advance(state: &RocketState, input: &ControlInput, environment: &Environment) -> RocketState {
    let mut next = kinematics::step(state, input, environment);
    if let Some(status) = landing::evaluate(&next, environment) {
        next.status = status;
    }
    next
}

/// Owns the rocket for a session: ticks it, and re-spawns it on reset.
pub struct Rocket {
    pub environment: Environment,
    state: RocketState,
    spawner: Spawner,
    debug_overlay: bool,
    toggle_held: bool,
    tick: u64,
}

impl Rocket {
    pub fn new(environment: Environment, spawn: SpawnPolicy, seed: Option<u64>) -> Self {
        let mut spawner = Spawner::new(spawn, seed);
        let state = spawner.spawn(&environment);
        Rocket {
            environment,
            state,
            spawner,
            debug_overlay: false,
            toggle_held: false,
            tick: 0,
        }
    }

    pub fn state(&self) -> &RocketState {
        &self.state
    }

    pub fn status(&self) -> FlightStatus {
        self.state.status
    }

    /// Human-readable result once the flight is over.
    pub fn outcome_label(&self) -> Option<String> {
        (!self.state.status.is_flying()).then(|| self.state.status.to_string())
    }

    pub fn debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    pub fn spawn_policy(&self) -> SpawnPolicy {
        self.spawner.policy()
    }

    /// Ticks since the last spawn.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn update(&mut self, input: &ControlInput) {
        if input.toggle_debug && !self.toggle_held {
            self.debug_overlay = !self.debug_overlay;
        }
        self.toggle_held = input.toggle_debug;

        if !self.state.status.is_flying() {
            if input.reset {
                self.reset();
            }
            return;
        }

        self.state = advance(&self.state, input, &self.environment);
        self.tick += 1;

        match self.state.status {
            FlightStatus::Flying => {}
            FlightStatus::Landed => tracing::info!(
                tick = self.tick,
                x = self.state.position.x,
                speed = self.state.speed(),
                angle = self.state.angle,
                "landed"
            ),
            FlightStatus::Crashed(reason) => tracing::info!(
                tick = self.tick,
                ?reason,
                x = self.state.position.x,
                vx = self.state.velocity.x,
                vy = self.state.velocity.y,
                angle = self.state.angle,
                angular_velocity = self.state.angular_velocity,
                "crashed"
            ),
        }
    }

    /// Replaces the whole state with a fresh spawn.
    pub fn reset(&mut self) {
        self.state = self.spawner.spawn(&self.environment);
        self.tick = 0;
        tracing::debug!(
            x = self.state.position.x,
            y = self.state.position.y,
            "rocket reset"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_rocket() -> Rocket {
        let env = Environment::classic();
        let spawn = SpawnPolicy::top_center(&env);
        Rocket::new(env, spawn, Some(3))
    }

    #[test]
    fn test_labels() {
        assert_eq!(FlightStatus::Landed.to_string(), "Landed Successfully");
        assert_eq!(
            FlightStatus::Crashed(CrashReason::OutOfBounds).to_string(),
            "Crashed (Out of bounds)"
        );
        assert_eq!(
            FlightStatus::Crashed(CrashReason::Speed).to_string(),
            "Crashed (speed)"
        );
        assert_eq!(
            FlightStatus::Crashed(CrashReason::Angle).to_string(),
            "Crashed (angle)"
        );
        assert_eq!(
            FlightStatus::Crashed(CrashReason::MissedPad).to_string(),
            "Crashed"
        );
    }

    #[test]
    fn test_free_fall_crashes_and_stays_crashed() {
        let mut rocket = classic_rocket();
        assert_eq!(rocket.outcome_label(), None);

        while rocket.status().is_flying() {
            rocket.update(&ControlInput::idle());
        }
        assert_eq!(rocket.status(), FlightStatus::Crashed(CrashReason::Speed));
        assert_eq!(rocket.outcome_label().as_deref(), Some("Crashed (speed)"));

        let frozen = *rocket.state();
        let ticks = rocket.tick();
        for _ in 0..10 {
            rocket.update(&ControlInput::thrust());
        }
        assert_eq!(*rocket.state(), frozen);
        assert_eq!(rocket.tick(), ticks);
    }

    #[test]
    fn test_reset_is_ignored_while_flying() {
        let mut rocket = classic_rocket();
        rocket.update(&ControlInput::idle());
        let before = *rocket.state();
        rocket.update(&ControlInput::reset());
        assert!(rocket.state().position.y > before.position.y);
        assert_eq!(rocket.tick(), 2);
    }

    #[test]
    fn test_debug_overlay_toggles_on_press_not_hold() {
        let mut rocket = classic_rocket();
        let toggle = ControlInput {
            toggle_debug: true,
            ..ControlInput::idle()
        };
        rocket.update(&toggle);
        assert!(rocket.debug_overlay());
        rocket.update(&toggle);
        assert!(rocket.debug_overlay());
        rocket.update(&ControlInput::idle());
        rocket.update(&toggle);
        assert!(!rocket.debug_overlay());
    }
}
