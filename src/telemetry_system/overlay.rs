use std::fmt;

use crate::constants::NEAR_GROUND_DISTANCE;
use crate::control::{environment::Environment, rocket::RocketState};

/// Colour hint for a readout's status light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Safe,
    Unsafe,
    /// Informational only, never a crash condition.
    Advisory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub label: &'static str,
    pub value: f64,
    pub indicator: Indicator,
}

impl Readout {
    fn new(label: &'static str, value: f64, safe: bool) -> Self {
        Readout {
            label,
            value,
            indicator: if safe { Indicator::Safe } else { Indicator::Unsafe },
        }
    }

    pub fn is_safe(&self) -> bool {
        self.indicator == Indicator::Safe
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.label, self.value)
    }
}

/// Debug overlay lines for the current state, in display order.
pub fn readouts(state: &RocketState, environment: &Environment) -> Vec<Readout> {
    let limits = &environment.thresholds;
    let velocity = state.velocity;
    // Axis readouts fall back to the combined limit when no axis limit is set.
    let axis_ok = |axis_limit: Option<f64>, value: f64| match axis_limit {
        Some(limit) => value.abs() <= limit,
        None => limits.speed_ok(value),
    };

    let mut lines = vec![
        Readout::new(
            "Horizontal Velocity",
            velocity.x,
            axis_ok(limits.max_horizontal_speed, velocity.x),
        ),
        Readout::new(
            "Vertical Velocity",
            velocity.y,
            axis_ok(limits.max_vertical_speed, velocity.y),
        ),
    ];
    if limits.max_speed.is_some() {
        lines.push(Readout::new(
            "Speed",
            state.speed(),
            limits.speed_ok(state.speed()),
        ));
    }
    lines.push(Readout::new("Angle", state.angle, limits.angle_ok(state.angle)));
    if limits.max_angular_velocity.is_some() {
        lines.push(Readout::new(
            "Rotational Velocity",
            state.angular_velocity,
            limits.angular_velocity_ok(state.angular_velocity),
        ));
    }
    lines.push(Readout::new(
        "X Position",
        state.position.x,
        environment.landing_zone().contains(state.position.x),
    ));

    let bottom = state.position.y + environment.contact_offset;
    lines.push(Readout {
        label: "Y Position",
        value: state.position.y,
        indicator: if bottom >= environment.ground_y - NEAR_GROUND_DISTANCE {
            Indicator::Safe
        } else {
            Indicator::Advisory
        },
    });

    if environment.fuel.is_modeled() {
        lines.push(Readout::new("Fuel", state.fuel, state.fuel > 0.0));
    }
    lines
}
