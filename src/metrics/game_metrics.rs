use std::time::{Duration, Instant};

/// Per-session numbers shown in the header: round clock, best score and
/// rounds played
pub struct GameMetrics {
    round_start: Option<Instant>,
    pub round_time: Duration,
    pub high_score: u32,
    pub rounds_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            round_start: None,
            round_time: Duration::ZERO,
            high_score: 0,
            rounds_played: 0,
        }
    }

    /// Refresh the round clock; frozen while no round is running
    pub fn update(&mut self) {
        if let Some(start) = self.round_start {
            self.round_time = start.elapsed();
        }
    }

    pub fn on_round_start(&mut self) {
        self.round_start = Some(Instant::now());
        self.round_time = Duration::ZERO;
    }

    pub fn on_round_over(&mut self, final_score: u32) {
        self.update();
        self.round_start = None;
        self.rounds_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn is_round_running(&self) -> bool {
        self.round_start.is_some()
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.round_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
