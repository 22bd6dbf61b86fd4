use crate::{
    control::{
        environment::{ControlModel, Environment},
        input::ControlInput,
        rocket::RocketState,
    },
    utils::vector2d::Vector2D,
};

/// Advances `state` by one fixed tick of forward Euler integration.
///
/// Order is rotation, thrust, gravity, translation. A rocket that is no
/// longer flying comes back unchanged.
pub fn step(state: &RocketState, input: &ControlInput, environment: &Environment) -> RocketState {
    let mut next = *state;
    if !next.status.is_flying() {
        return next;
    }

    apply_rotation(&mut next, input, &environment.control);
    if input.thrust {
        apply_thrust(&mut next, environment);
    }

    next.velocity.y += environment.gravity;
    next.position += next.velocity;

    tracing::trace!(
        x = next.position.x,
        y = next.position.y,
        vx = next.velocity.x,
        vy = next.velocity.y,
        angle = next.angle,
        "integrated tick"
    );
    next
}

fn apply_rotation(state: &mut RocketState, input: &ControlInput, model: &ControlModel) {
    let direction = input.turn_direction();
    match *model {
        ControlModel::Direct { turn_rate } => {
            state.angle += direction * turn_rate;
        }
        ControlModel::Inertial {
            angular_acceleration,
            damping,
        } => {
            state.angular_velocity += direction * angular_acceleration;
            state.angle += state.angular_velocity;
            state.angular_velocity *= damping;
        }
    }
}

fn apply_thrust(state: &mut RocketState, environment: &Environment) {
    let scale = environment.fuel.thrust_scale(state.fuel);
    if scale <= 0.0 {
        return;
    }
    state.velocity += Vector2D::from_heading(state.angle) * (environment.thrust * scale);
    state.fuel = environment.fuel.burn(state.fuel);
}
