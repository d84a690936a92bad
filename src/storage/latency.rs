use crate::config::LatencySettings;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    List,
    Write,
}

/// Simulated backend delay. Purely cosmetic; zero by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latency {
    settings: LatencySettings,
}

impl Latency {
    pub fn new(settings: LatencySettings) -> Self {
        Self { settings }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn delay_for(&self, op: Operation) -> Duration {
        let ms = match op {
            Operation::Read => self.settings.read_ms,
            Operation::List => self.settings.list_ms,
            Operation::Write => self.settings.write_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn pause(&self, op: Operation) {
        let delay = self.delay_for(op);
        if !delay.is_zero() {
            tracing::trace!(?op, ms = delay.as_millis() as u64, "Simulating latency");
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_per_operation() {
        let latency = Latency::new(LatencySettings {
            read_ms: 200,
            list_ms: 300,
            write_ms: 400,
        });
        assert_eq!(latency.delay_for(Operation::Read), Duration::from_millis(200));
        assert_eq!(latency.delay_for(Operation::List), Duration::from_millis(300));
        assert_eq!(latency.delay_for(Operation::Write), Duration::from_millis(400));
    }

    #[test]
    fn test_default_is_instant() {
        let latency = Latency::none();
        assert!(latency.delay_for(Operation::Write).is_zero());
        latency.pause(Operation::Write);
    }
}
