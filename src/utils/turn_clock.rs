use chrono::{DateTime, Local};

/// Wall-clock timing for one turn. Timing is display-only glue: nothing in
/// the rules layer reads it and a slow turn has no game effect.
pub struct TurnClock {
    started: DateTime<Local>,
}

impl TurnClock {
    pub fn start() -> Self {
        TurnClock {
            started: Local::now(),
        }
    }

    pub fn restart(&mut self) {
        self.started = Local::now();
    }

    pub fn elapsed_seconds(&self) -> f64 {
        let elapsed = Local::now().signed_duration_since(self.started);
        elapsed.num_milliseconds() as f64 / 1000.0
    }

    /// Elapsed time as a short human label, for example "4.2s".
    pub fn elapsed_label(&self) -> String {
        format!("{:.1}s", self.elapsed_seconds())
    }
}
