use crate::control::{
    environment::Environment,
    rocket::{CrashReason, FlightStatus, RocketState},
};

/// Terminal status for `state` this tick, or `None` while still airborne.
///
/// Ground contact is tested before the arena bounds. Rockets that have
/// already finished are not re-evaluated.
pub fn evaluate(state: &RocketState, environment: &Environment) -> Option<FlightStatus> {
    if !state.status.is_flying() {
        return None;
    }
    if touches_ground(state, environment) {
        return Some(classify_touchdown(state, environment));
    }
    if out_of_bounds(state, environment) {
        return Some(FlightStatus::Crashed(CrashReason::OutOfBounds));
    }
    None
}

pub fn touches_ground(state: &RocketState, environment: &Environment) -> bool {
    state.position.y + environment.contact_offset >= environment.ground_y
}

pub fn out_of_bounds(state: &RocketState, environment: &Environment) -> bool {
    let Some(margin) = environment.bounds_margin else {
        return false;
    };
    let position = state.position;
    position.x < -margin
        || position.x > environment.width + margin
        || position.y < -margin
        || position.y > environment.height + margin
}

/// Landed or crashed, for a rocket that is touching the ground.
///
/// The pad is checked first, then speed, then attitude.
pub fn classify_touchdown(state: &RocketState, environment: &Environment) -> FlightStatus {
    if !environment.landing_zone().contains(state.position.x) {
        return FlightStatus::Crashed(CrashReason::MissedPad);
    }
    match first_violation(state, environment) {
        Some(reason) => FlightStatus::Crashed(reason),
        None => FlightStatus::Landed,
    }
}

fn first_violation(state: &RocketState, environment: &Environment) -> Option<CrashReason> {
    let limits = &environment.thresholds;
    let velocity = state.velocity;

    if !(limits.speed_ok(velocity.magnitude())
        && limits.vertical_speed_ok(velocity.y)
        && limits.horizontal_speed_ok(velocity.x))
    {
        Some(CrashReason::Speed)
    } else if !limits.angle_ok(state.angle) {
        Some(CrashReason::Angle)
    } else if !limits.angular_velocity_ok(state.angular_velocity) {
        Some(CrashReason::AngularVelocity)
    } else {
        None
    }
}
