use super::{
    environment::{ControlModel, Environment},
    input::ControlInput,
    rocket::RocketState,
};

/// Anything that can press the keys: a person behind a host, or an autopilot.
pub trait Pilot {
    fn controls(&mut self, state: &RocketState, environment: &Environment) -> ControlInput;
}

/// Never touches the controls in flight; asks for a reset once it is over.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdlePilot;

impl Pilot for IdlePilot {
    fn controls(&mut self, state: &RocketState, _environment: &Environment) -> ControlInput {
        if state.status.is_flying() {
            ControlInput::idle()
        } else {
            ControlInput::reset()
        }
    }
}

#[derive(Debug, Clone)]
struct PIDController {
    kp: f64, // Proportional gain
    ki: f64, // Integral gain
    kd: f64, // Derivative gain
    previous_error: Option<f64>,
    integral: f64,
}

impl PIDController {
    fn new(kp: f64, ki: f64, kd: f64) -> Self {
        PIDController {
            kp,
            ki,
            kd,
            previous_error: None,
            integral: 0.0,
        }
    }

    /// One update with a step of one tick, clamped to [-1, 1].
    fn calculate(&mut self, error: f64) -> f64 {
        self.integral = (self.integral + error).clamp(-10.0, 10.0);
        let derivative = self.previous_error.map_or(0.0, |previous| error - previous);
        self.previous_error = Some(error);
        (self.kp * error + self.ki * self.integral + self.kd * derivative).clamp(-1.0, 1.0)
    }

    fn reset(&mut self) {
        self.previous_error = None;
        self.integral = 0.0;
    }
}

// Below this altitude the rocket is held upright for touchdown.
const FLARE_ALTITUDE: f64 = 40.0;
const MIN_DESCENT_RATE: f64 = 0.5;
const MAX_DESCENT_RATE: f64 = 1.5;
const DESCENT_RATE_PER_PIXEL: f64 = 0.02;
const ATTITUDE_DEADBAND: f64 = 0.5; // degrees
const MAX_SPIN_LEAD: f64 = 30.0; // ticks

/// Autopilot: steers toward the pad with a PID on horizontal error and
/// holds a descent rate that shrinks with altitude.
#[derive(Debug, Clone)]
pub struct GuidanceSystem {
    lateral_controller: PIDController,
    /// Share of the safe touchdown angle the autopilot is willing to lean.
    tilt_fraction: f64,
}

impl Default for GuidanceSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl GuidanceSystem {
    pub fn new() -> Self {
        GuidanceSystem {
            lateral_controller: PIDController::new(0.01, 0.0, 0.3),
            tilt_fraction: 0.5,
        }
    }

    fn altitude(state: &RocketState, environment: &Environment) -> f64 {
        environment.ground_y - (state.position.y + environment.contact_offset)
    }

    fn target_descent_rate(altitude: f64, environment: &Environment) -> f64 {
        let rate = (DESCENT_RATE_PER_PIXEL * altitude).clamp(MIN_DESCENT_RATE, MAX_DESCENT_RATE);
        match environment.thresholds.descent_limit() {
            Some(limit) => rate.min(0.75 * limit),
            None => rate,
        }
    }

    fn target_angle(&mut self, state: &RocketState, environment: &Environment) -> f64 {
        if Self::altitude(state, environment) < FLARE_ALTITUDE {
            return 0.0;
        }
        // Without a pad only drift matters, so the horizontal error is zero.
        let error = environment
            .pad
            .map_or(0.0, |pad| pad.center() - state.position.x);
        let command = self.lateral_controller.calculate(error);
        command * environment.thresholds.max_angle * self.tilt_fraction
    }

    /// Where the nose will settle if the keys are released now.
    fn predicted_angle(state: &RocketState, model: &ControlModel) -> f64 {
        match *model {
            ControlModel::Direct { .. } => state.angle,
            ControlModel::Inertial { damping, .. } => {
                let lead = if damping < 1.0 {
                    (1.0 / (1.0 - damping)).min(MAX_SPIN_LEAD)
                } else {
                    MAX_SPIN_LEAD
                };
                state.angle + state.angular_velocity * lead
            }
        }
    }
}

impl Pilot for GuidanceSystem {
    fn controls(&mut self, state: &RocketState, environment: &Environment) -> ControlInput {
        if !state.status.is_flying() {
            self.lateral_controller.reset();
            return ControlInput::reset();
        }

        let target_angle = self.target_angle(state, environment);
        let predicted = Self::predicted_angle(state, &environment.control);
        let altitude = Self::altitude(state, environment);

        ControlInput {
            rotate_left: predicted > target_angle + ATTITUDE_DEADBAND,
            rotate_right: predicted < target_angle - ATTITUDE_DEADBAND,
            thrust: state.velocity.y > Self::target_descent_rate(altitude, environment),
            reset: false,
            toggle_debug: false,
        }
    }
}
