use std::time::{Duration, Instant};

/// Per-session bookkeeping shown in the header
pub struct GameMetrics {
    round_started: Instant,
    /// Clock stopped at the last loss
    stopped: bool,
    pub elapsed_time: Duration,
    /// 1-based number of the current round
    pub round: u32,
    pub losses: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            stopped: false,
            elapsed_time: Duration::ZERO,
            round: 1,
            losses: 0,
        }
    }

    /// Refresh the round clock, unless the round is already lost
    pub fn update(&mut self) {
        if !self.stopped {
            self.elapsed_time = self.round_started.elapsed();
        }
    }

    /// Freeze the clock at the length of the lost round
    pub fn on_game_over(&mut self) {
        self.update();
        self.stopped = true;
        self.losses += 1;
    }

    /// A new round began after a loss or a manual restart
    pub fn on_round_start(&mut self) {
        self.round += 1;
        self.round_started = Instant::now();
        self.stopped = false;
        self.elapsed_time = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_round_counting() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.round, 1);

        metrics.on_game_over();
        metrics.on_round_start();
        metrics.on_round_start();

        assert_eq!(metrics.round, 3);
        assert_eq!(metrics.losses, 1);
    }

    #[test]
    fn test_clock_frozen_after_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over();
        let final_time = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(50));
        metrics.update();
        assert_eq!(metrics.elapsed_time, final_time);

        // Next round runs the clock again
        metrics.on_round_start();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() >= 20);
    }

    #[test]
    fn test_round_start_resets_clock() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_round_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
