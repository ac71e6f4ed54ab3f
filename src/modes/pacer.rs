/// Decides on which frames the simulation ticks.
///
/// A tick is due on the first frame and then every `interval` frames. An
/// accepted turn may pull the next tick forward so the snake reacts quickly.
#[derive(Debug, Clone)]
pub struct TickPacer {
    interval: u32,
    /// Frames left before the next tick, 0 means due now
    countdown: u32,
}

impl TickPacer {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            countdown: 0,
        }
    }

    /// Advance one frame, returning whether the simulation should tick
    pub fn advance(&mut self) -> bool {
        if self.countdown == 0 {
            self.countdown = self.interval - 1;
            true
        } else {
            self.countdown -= 1;
            false
        }
    }

    /// Make the next frame a tick, unless the last tick was less than a
    /// third of an interval ago.
    pub fn hasten(&mut self) {
        let since_tick = self.interval - 1 - self.countdown;
        if since_tick >= self.interval / 3 {
            self.countdown = 0;
        }
    }

    /// Tick on the next frame, used when a round starts
    pub fn reset(&mut self) {
        self.countdown = 0;
    }
}
