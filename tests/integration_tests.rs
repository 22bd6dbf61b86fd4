use approx::assert_relative_eq;
use rocket_lander::{
    advance, step, ControlInput, ControlModel, CrashReason, Environment, FlightStatus,
    GuidanceSystem, IdlePilot, Pilot, Preset, Rocket, RocketState, SimulationConfig, SpawnPolicy,
    Telemetry, Vector2D,
};

// Pad-approach rules with a fixed spawn so runs are repeatable
fn create_test_rocket() -> Rocket {
    let config = SimulationConfig::preset(Preset::PadApproach);
    Rocket::new(
        config.environment,
        SpawnPolicy::Fixed { x: 400.0, y: 60.0 },
        Some(11),
    )
}

fn fly(
    state: RocketState,
    environment: &Environment,
    inputs: &[ControlInput],
) -> Vec<RocketState> {
    let mut states = vec![state];
    for input in inputs {
        let next = advance(states.last().unwrap(), input, environment);
        states.push(next);
    }
    states
}

fn scripted_inputs(len: usize) -> Vec<ControlInput> {
    (0..len)
        .map(|i| ControlInput {
            rotate_left: i % 7 < 2,
            rotate_right: i % 11 == 3,
            thrust: i % 3 != 0,
            ..ControlInput::idle()
        })
        .collect()
}

// Bottom edge one pixel above the ground, over the pad centre
fn just_above_pad(environment: &Environment, vx: f64, vy: f64, angle: f64) -> RocketState {
    let y = environment.ground_y - environment.contact_offset - 1.0;
    let mut state = RocketState::at_rest(Vector2D::new(400.0, y), 0.0);
    state.velocity = Vector2D::new(vx, vy);
    state.angle = angle;
    state
}

#[test]
fn test_integration_is_deterministic() {
    let environment = Environment::pad_approach();
    let start = RocketState::at_rest(Vector2D::new(300.0, 80.0), 0.0);
    let inputs = scripted_inputs(120);

    let first = fly(start, &environment, &inputs);
    let second = fly(start, &environment, &inputs);

    assert_eq!(first, second, "same inputs must give identical state sequences");
}

#[test]
fn test_gravity_without_thrust() {
    let environment = Environment {
        gravity: 0.05,
        thrust: 0.0,
        ..Environment::pad_approach()
    };
    let start = RocketState::at_rest(Vector2D::new(400.0, 100.0), 0.0);
    let mut state = start;

    for _ in 0..10 {
        let next = step(&state, &ControlInput::idle(), &environment);
        assert!(next.velocity.y > state.velocity.y);
        assert_relative_eq!(
            next.velocity.y - state.velocity.y,
            environment.gravity,
            epsilon = 1e-12
        );
        state = next;
    }

    assert_relative_eq!(state.velocity.y, 0.5, epsilon = 1e-9);
    assert_relative_eq!(state.position.y - start.position.y, 2.75, epsilon = 1e-9);
    assert_eq!(state.position.x, start.position.x);
}

#[test]
fn test_rotational_damping_converges() {
    let environment = Environment {
        gravity: 0.0,
        ..Environment::pad_approach()
    };
    let mut state = RocketState::at_rest(Vector2D::new(400.0, 300.0), 0.0);
    let spin = ControlInput {
        rotate_right: true,
        ..ControlInput::idle()
    };
    for _ in 0..5 {
        state = step(&state, &spin, &environment);
    }
    assert!(state.angular_velocity > 0.0);

    let mut previous = state.angular_velocity.abs();
    for _ in 0..1_000 {
        state = step(&state, &ControlInput::idle(), &environment);
        let current = state.angular_velocity.abs();
        assert!(current <= previous, "spin must never grow without input");
        previous = current;
    }
    assert!(previous < 1e-3, "spin should decay toward zero, got {previous}");
}

#[test]
fn test_terminal_state_is_sticky() {
    let environment = Environment::pad_approach();
    let approach = just_above_pad(&environment, 0.0, 5.0, 0.0);
    let crashed = advance(&approach, &ControlInput::idle(), &environment);
    assert_eq!(crashed.status, FlightStatus::Crashed(CrashReason::Speed));

    for input in scripted_inputs(30) {
        assert_eq!(advance(&crashed, &input, &environment), crashed);
        assert_eq!(step(&crashed, &input, &environment), crashed);
    }
}

#[test]
fn test_missing_the_pad_always_crashes() {
    let environment = Environment::pad_approach();
    let mut state = just_above_pad(&environment, 0.0, 1.0, 0.0);
    state.position.x = 349.0;

    let next = advance(&state, &ControlInput::idle(), &environment);
    assert_eq!(next.status, FlightStatus::Crashed(CrashReason::MissedPad));
}

#[test]
fn test_soft_touchdown_on_pad_lands() {
    let environment = Environment::pad_approach();
    let state = just_above_pad(&environment, 0.5, 1.0, 5.0);

    let next = advance(&state, &ControlInput::idle(), &environment);
    assert_eq!(next.status, FlightStatus::Landed);
}

#[test]
fn test_fast_touchdown_crashes_on_speed() {
    let environment = Environment::pad_approach();
    let state = just_above_pad(&environment, 0.5, 5.0, 5.0);

    let next = advance(&state, &ControlInput::idle(), &environment);
    assert_eq!(next.status, FlightStatus::Crashed(CrashReason::Speed));
    assert_eq!(next.status.to_string(), "Crashed (speed)");
}

#[test]
fn test_reset_restores_every_field() {
    let mut rocket = create_test_rocket();
    let fresh = *rocket.state();
    let spin = ControlInput {
        rotate_left: true,
        thrust: true,
        ..ControlInput::idle()
    };

    while rocket.status().is_flying() {
        rocket.update(&spin);
    }
    assert_ne!(*rocket.state(), fresh);

    rocket.update(&ControlInput::idle());
    assert!(!rocket.status().is_flying(), "reset needs the reset key");

    rocket.update(&ControlInput::reset());
    assert_eq!(*rocket.state(), fresh, "reset must replace the whole state");
    assert_eq!(rocket.tick(), 0);
    assert_eq!(rocket.outcome_label(), None);
}

#[test]
fn test_random_spawns_reset_to_a_new_edge_position() {
    let config = SimulationConfig::preset(Preset::PadApproach);
    let mut rocket = Rocket::new(config.environment, config.spawn, Some(5));
    let mut pilot = IdlePilot;
    let mut positions = Vec::new();

    for _ in 0..5 {
        positions.push(rocket.state().position);
        let mut guard = 0;
        while rocket.status().is_flying() && guard < 10_000 {
            let input = pilot.controls(rocket.state(), &rocket.environment);
            rocket.update(&input);
            guard += 1;
        }
        assert!(!rocket.status().is_flying());
        let input = pilot.controls(rocket.state(), &rocket.environment);
        rocket.update(&input);
        assert!(rocket.status().is_flying());
        assert_eq!(rocket.state().angle, 0.0);
        assert_eq!(rocket.state().angular_velocity, 0.0);
    }

    positions.dedup();
    assert!(positions.len() > 1, "edge spawns should vary between rounds");
}

#[test]
fn test_guidance_lands_classic_session() {
    println!("INTEGRATION TEST: Classic autopilot landing");

    let config = SimulationConfig::preset(Preset::Classic);
    let mut rocket = Rocket::new(config.environment, config.spawn, config.seed);
    let mut pilot = GuidanceSystem::new();
    let mut telemetry = Telemetry::new();

    while rocket.status().is_flying() && telemetry.ticks() < 10_000 {
        let input = pilot.controls(rocket.state(), &rocket.environment);
        rocket.update(&input);
        telemetry.collect_data(&rocket, &input);
    }

    println!("{}", telemetry.summary());
    assert_eq!(rocket.outcome_label().as_deref(), Some("Landed Successfully"));
    assert!(telemetry.thrust_ticks() > 0);
    assert!(telemetry.fuel_used().unwrap() < 100.0);
}

#[test]
fn test_direct_model_keeps_angular_velocity_at_zero() {
    let environment = Environment::classic();
    assert!(matches!(environment.control, ControlModel::Direct { .. }));
    let start = RocketState::at_rest(Vector2D::new(400.0, 50.0), 100.0);

    for state in fly(start, &environment, &scripted_inputs(60)) {
        assert_eq!(state.angular_velocity, 0.0);
    }
}
