use crate::constants::TICKS_PER_SECOND;
use crate::control::input::ControlInput;
use crate::control::rocket::{FlightStatus, Rocket};

/// Per-flight statistics gathered tick by tick.
pub struct Telemetry {
    ticks: u64,
    thrust_ticks: u64,
    max_speed: f64,
    max_descent_rate: f64,
    initial_fuel: Option<f64>,
    last_fuel: Option<f64>,
    min_fuel: f64,
    status_changes: Vec<(FlightStatus, u64)>,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            ticks: 0,
            thrust_ticks: 0,
            max_speed: 0.0,
            max_descent_rate: 0.0,
            initial_fuel: None,
            last_fuel: None,
            min_fuel: f64::MAX,
            status_changes: Vec::new(),
        }
    }

    fn format_time(ticks: u64) -> String {
        let elapsed_time = ticks as f64 / TICKS_PER_SECOND;
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    /// Records the rocket as it stands after `input` was applied.
    ///
    /// Status transitions are stamped with the tick that produced them, so a
    /// landing matches `Rocket::tick()` for a flight observed from its start.
    pub fn collect_data(&mut self, rocket: &Rocket, input: &ControlInput) {
        let state = rocket.state();
        if self.status_changes.is_empty() {
            self.status_changes.push((FlightStatus::Flying, 0));
        }
        let changed = self
            .status_changes
            .last()
            .map_or(true, |(last, _)| *last != state.status);
        if !state.status.is_flying() && !changed {
            return;
        }

        self.ticks += 1;
        if changed {
            self.status_changes.push((state.status, self.ticks));
        }

        // Only ticks where the engine actually fired count as thrust time.
        let fuel = rocket.environment.fuel;
        let fuel_before = self.last_fuel.unwrap_or_else(|| fuel.capacity());
        if input.thrust && fuel.thrust_scale(fuel_before) > 0.0 {
            self.thrust_ticks += 1;
        }
        self.last_fuel = Some(state.fuel);

        self.max_speed = self.max_speed.max(state.speed());
        self.max_descent_rate = self.max_descent_rate.max(state.velocity.y);
        if fuel.is_modeled() {
            if self.initial_fuel.is_none() {
                self.initial_fuel = Some(fuel.capacity());
            }
            self.min_fuel = self.min_fuel.min(state.fuel);
        }
    }

    pub fn status_changes(&self) -> &[(FlightStatus, u64)] {
        &self.status_changes
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn thrust_ticks(&self) -> u64 {
        self.thrust_ticks
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn fuel_used(&self) -> Option<f64> {
        self.initial_fuel.map(|initial| initial - self.min_fuel)
    }

    pub fn final_status(&self) -> Option<FlightStatus> {
        self.status_changes.last().map(|(status, _)| *status)
    }

    pub fn summary(&self) -> String {
        let mut out = String::from("--- Flight Summary ---\n");
        out += &format!("Flight Time: {}\n", Self::format_time(self.ticks));
        out += &format!(
            "Thrust Time: {}\n",
            Self::format_time(self.thrust_ticks)
        );
        out += &format!("Max Speed: {:.2} px/tick\n", self.max_speed);
        out += &format!("Max Descent Rate: {:.2} px/tick\n", self.max_descent_rate);
        if let Some(used) = self.fuel_used() {
            out += &format!("Fuel Used: {:.1} (min remaining {:.1})\n", used, self.min_fuel);
        }
        out += "--- Status Transitions ---\n";
        for (status, tick) in &self.status_changes {
            out += &format!("{} at {}\n", status, Self::format_time(*tick));
        }
        out
    }
}
