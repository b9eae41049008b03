//! Reconnect timing

use std::time::Duration;

/// Delays between reconnect attempts after a lost transport. After the last
/// delay the connection gives up and settles in `Disconnected`; the next
/// page load starts fresh.
pub const RECONNECT_DELAYS: [Duration; 4] = [
    Duration::ZERO,
    Duration::from_secs(2),
    Duration::from_secs(10),
    Duration::from_secs(30),
];

/// Iterator over the reconnect schedule.
#[derive(Debug, Default)]
pub struct ReconnectDelays {
    attempt: usize,
}

impl ReconnectDelays {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for ReconnectDelays {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let delay = RECONNECT_DELAYS.get(self.attempt).copied();
        if delay.is_some() {
            self.attempt += 1;
        }
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_schedule_then_gives_up() {
        let delays: Vec<u64> = ReconnectDelays::new().map(|d| d.as_secs()).collect();
        assert_eq!(delays, [0, 2, 10, 30]);
        assert!(ReconnectDelays::new().nth(4).is_none());
    }
}
