/// Key states sampled by the host for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub reset: bool,
    pub toggle_debug: bool,
}

impl ControlInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn thrust() -> Self {
        ControlInput {
            thrust: true,
            ..Self::default()
        }
    }

    pub fn reset() -> Self {
        ControlInput {
            reset: true,
            ..Self::default()
        }
    }

    /// -1 for left only, +1 for right only, 0 for neither or both.
    pub fn turn_direction(&self) -> f64 {
        match (self.rotate_left, self.rotate_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
