use serde::{Deserialize, Serialize};

/// How remaining fuel limits thrust.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum FuelPolicy {
    /// No tank at all. Fuel stays at zero and is never reported.
    Unlimited,
    /// Full thrust while any fuel is left, nothing after.
    HardCutoff { capacity: f64, burn_rate: f64 },
    /// Thrust scales with the fraction of the tank left.
    Tapered { capacity: f64, burn_rate: f64 },
}

impl FuelPolicy {
    pub fn capacity(&self) -> f64 {
        match *self {
            FuelPolicy::Unlimited => 0.0,
            FuelPolicy::HardCutoff { capacity, .. } | FuelPolicy::Tapered { capacity, .. } => {
                capacity
            }
        }
    }

    pub fn is_modeled(&self) -> bool {
        !matches!(self, FuelPolicy::Unlimited)
    }

    /// Fraction of nominal thrust available with `fuel` in the tank.
    pub fn thrust_scale(&self, fuel: f64) -> f64 {
        match *self {
            FuelPolicy::Unlimited => 1.0,
            FuelPolicy::HardCutoff { .. } => {
                if fuel > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            FuelPolicy::Tapered { capacity, .. } => (fuel / capacity).clamp(0.0, 1.0),
        }
    }

    /// Fuel left after one tick of burning.
    pub fn burn(&self, fuel: f64) -> f64 {
        match *self {
            FuelPolicy::Unlimited => fuel,
            FuelPolicy::HardCutoff { burn_rate, .. } | FuelPolicy::Tapered { burn_rate, .. } => {
                (fuel - burn_rate).max(0.0)
            }
        }
    }
}
