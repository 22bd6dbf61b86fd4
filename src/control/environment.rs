use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::control::propulsion::FuelPolicy;
use crate::errors::SimulationError;

/// How the turn keys act on orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ControlModel {
    /// Each held tick turns the nose by `turn_rate` degrees, no inertia.
    Direct { turn_rate: f64 },
    /// Keys accelerate the spin; the spin decays by `damping` every tick.
    Inertial {
        angular_acceleration: f64,
        damping: f64,
    },
}

/// Inclusive horizontal interval on the ground line that counts as the pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadSpan {
    pub left: f64,
    pub right: f64,
}

impl PadSpan {
    pub fn centered(arena_width: f64, width: f64) -> Self {
        let left = (arena_width - width) / 2.0;
        PadSpan {
            left,
            right: left + width,
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }

    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

/// Touchdown limits. Unset limits are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyThresholds {
    #[serde(default)]
    pub max_speed: Option<f64>,
    #[serde(default)]
    pub max_vertical_speed: Option<f64>,
    #[serde(default)]
    pub max_horizontal_speed: Option<f64>,
    pub max_angle: f64,
    #[serde(default)]
    pub max_angular_velocity: Option<f64>,
}

fn within(limit: Option<f64>, value: f64) -> bool {
    limit.map_or(true, |limit| value.abs() <= limit)
}

impl SafetyThresholds {
    pub fn speed_ok(&self, speed: f64) -> bool {
        within(self.max_speed, speed)
    }

    pub fn vertical_speed_ok(&self, vy: f64) -> bool {
        within(self.max_vertical_speed, vy)
    }

    pub fn horizontal_speed_ok(&self, vx: f64) -> bool {
        within(self.max_horizontal_speed, vx)
    }

    pub fn angle_ok(&self, angle: f64) -> bool {
        angle.abs() <= self.max_angle
    }

    pub fn angular_velocity_ok(&self, angular_velocity: f64) -> bool {
        within(self.max_angular_velocity, angular_velocity)
    }

    /// Tightest bound on descent rate implied by the vertical and combined limits.
    pub fn descent_limit(&self) -> Option<f64> {
        match (self.max_vertical_speed, self.max_speed) {
            (Some(v), Some(s)) => Some(v.min(s)),
            (v, s) => v.or(s),
        }
    }

    fn limits(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("max_speed", self.max_speed),
            ("max_vertical_speed", self.max_vertical_speed),
            ("max_horizontal_speed", self.max_horizontal_speed),
            ("max_angle", Some(self.max_angle)),
            ("max_angular_velocity", self.max_angular_velocity),
        ]
        .into_iter()
        .filter_map(|(name, limit)| limit.map(|limit| (name, limit)))
    }
}

/// Everything about a run that stays constant from spawn to touchdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub width: f64,
    pub height: f64,
    pub gravity: f64,
    pub thrust: f64,
    pub ground_y: f64,
    /// Distance from the tracked position down to the rocket's bottom edge.
    pub contact_offset: f64,
    /// `None` makes the whole ground line a valid pad.
    #[serde(default)]
    pub pad: Option<PadSpan>,
    /// `None` disables the out-of-bounds crash.
    #[serde(default)]
    pub bounds_margin: Option<f64>,
    pub control: ControlModel,
    pub fuel: FuelPolicy,
    pub thresholds: SafetyThresholds,
}

impl Environment {
    /// Top-centre spawn, whole ground is a pad, direct rotation, finite fuel.
    pub fn classic() -> Self {
        Environment {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            gravity: CLASSIC_GRAVITY,
            thrust: CLASSIC_THRUST,
            ground_y: ARENA_HEIGHT - CLASSIC_GROUND_HEIGHT,
            contact_offset: CLASSIC_CONTACT_OFFSET,
            pad: None,
            bounds_margin: None,
            control: ControlModel::Direct {
                turn_rate: CLASSIC_TURN_RATE,
            },
            fuel: FuelPolicy::HardCutoff {
                capacity: CLASSIC_FUEL_CAPACITY,
                burn_rate: CLASSIC_FUEL_BURN_RATE,
            },
            thresholds: SafetyThresholds {
                max_speed: Some(CLASSIC_MAX_SPEED),
                max_vertical_speed: None,
                max_horizontal_speed: None,
                max_angle: CLASSIC_MAX_ANGLE,
                max_angular_velocity: None,
            },
        }
    }

    /// Centred pad, inertial rotation, unlimited fuel, out-of-bounds crashes.
    pub fn pad_approach() -> Self {
        Environment {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            gravity: APPROACH_GRAVITY,
            thrust: APPROACH_THRUST,
            ground_y: ARENA_HEIGHT - APPROACH_GROUND_HEIGHT,
            contact_offset: APPROACH_CONTACT_OFFSET,
            pad: Some(PadSpan::centered(ARENA_WIDTH, APPROACH_PAD_WIDTH)),
            bounds_margin: Some(APPROACH_BOUNDS_MARGIN),
            control: ControlModel::Inertial {
                angular_acceleration: APPROACH_ANGULAR_ACCELERATION,
                damping: APPROACH_ROTATIONAL_DAMPING,
            },
            fuel: FuelPolicy::Unlimited,
            thresholds: SafetyThresholds {
                max_speed: None,
                max_vertical_speed: Some(APPROACH_MAX_VERTICAL_SPEED),
                max_horizontal_speed: Some(APPROACH_MAX_HORIZONTAL_SPEED),
                max_angle: APPROACH_MAX_ANGLE,
                max_angular_velocity: Some(APPROACH_MAX_ANGULAR_VELOCITY),
            },
        }
    }

    /// The pad's horizontal span, or the whole ground line if there is no pad.
    pub fn landing_zone(&self) -> PadSpan {
        self.pad.unwrap_or(PadSpan {
            left: f64::NEG_INFINITY,
            right: f64::INFINITY,
        })
    }

    /// Point the spawner aims new rockets at.
    pub fn target(&self) -> (f64, f64) {
        let x = self.pad.map_or(self.width / 2.0, |pad| pad.center());
        (x, self.ground_y)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let invalid = |msg: String| Err(SimulationError::InvalidEnvironment(msg));

        if !(self.width > 0.0 && self.height > 0.0) {
            return invalid(format!(
                "arena must have a positive size, got {} x {}",
                self.width, self.height
            ));
        }
        if self.gravity < 0.0 || self.thrust < 0.0 {
            return invalid(format!(
                "gravity and thrust must be non-negative, got {} and {}",
                self.gravity, self.thrust
            ));
        }
        if self.contact_offset < 0.0 {
            return invalid(format!(
                "contact offset must be non-negative, got {}",
                self.contact_offset
            ));
        }
        if let Some(pad) = self.pad {
            if pad.left > pad.right {
                return invalid(format!(
                    "pad span is inverted: left {} > right {}",
                    pad.left, pad.right
                ));
            }
        }
        if let Some(margin) = self.bounds_margin {
            if margin < 0.0 {
                return invalid(format!("bounds margin must be non-negative, got {margin}"));
            }
        }
        match self.control {
            ControlModel::Direct { turn_rate } if turn_rate < 0.0 => {
                return invalid(format!("turn rate must be non-negative, got {turn_rate}"));
            }
            ControlModel::Inertial {
                angular_acceleration,
                damping,
            } => {
                if angular_acceleration < 0.0 {
                    return invalid(format!(
                        "angular acceleration must be non-negative, got {angular_acceleration}"
                    ));
                }
                if !(damping > 0.0 && damping <= 1.0) {
                    return invalid(format!("damping must be in (0, 1], got {damping}"));
                }
            }
            _ => {}
        }
        match self.fuel {
            FuelPolicy::HardCutoff {
                capacity,
                burn_rate,
            }
            | FuelPolicy::Tapered {
                capacity,
                burn_rate,
            } => {
                if !(capacity > 0.0) || burn_rate < 0.0 {
                    return invalid(format!(
                        "fuel needs a positive capacity and non-negative burn rate, got {capacity} and {burn_rate}"
                    ));
                }
            }
            FuelPolicy::Unlimited => {}
        }
        if let Some((name, limit)) = self.thresholds.limits().find(|(_, limit)| !(*limit > 0.0)) {
            return invalid(format!("{name} must be positive, got {limit}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(Environment::classic().validate().is_ok());
        assert!(Environment::pad_approach().validate().is_ok());
    }

    #[test]
    fn test_pad_approach_pad_is_centered() {
        let pad = Environment::pad_approach().pad.unwrap();
        assert_eq!(pad.left, 350.0);
        assert_eq!(pad.right, 450.0);
        assert!(pad.contains(350.0));
        assert!(pad.contains(450.0));
        assert!(!pad.contains(450.5));
    }

    #[test]
    fn test_classic_landing_zone_is_whole_ground() {
        let zone = Environment::classic().landing_zone();
        assert!(zone.contains(-1_000.0));
        assert!(zone.contains(1_000.0));
    }

    #[test]
    fn test_rejects_bad_damping() {
        let mut env = Environment::pad_approach();
        env.control = ControlModel::Inertial {
            angular_acceleration: 0.2,
            damping: 1.5,
        };
        assert!(matches!(
            env.validate(),
            Err(SimulationError::InvalidEnvironment(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let mut env = Environment::classic();
        env.thresholds.max_speed = Some(0.0);
        let err = env.validate().unwrap_err();
        assert!(err.to_string().contains("max_speed"));
    }

    #[test]
    fn test_rejects_inverted_pad() {
        let mut env = Environment::pad_approach();
        env.pad = Some(PadSpan {
            left: 500.0,
            right: 400.0,
        });
        assert!(env.validate().is_err());
    }

    #[test]
    fn test_descent_limit_takes_tightest_bound() {
        let mut thresholds = Environment::pad_approach().thresholds;
        assert_eq!(thresholds.descent_limit(), Some(2.5));
        thresholds.max_speed = Some(2.0);
        assert_eq!(thresholds.descent_limit(), Some(2.0));
        assert_eq!(Environment::classic().thresholds.descent_limit(), Some(2.0));
    }
}
