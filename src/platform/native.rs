//! Native frame driver

use std::time::{Duration, Instant};

/// Calls a frame function at a fixed rate on the current thread
#[derive(Debug, Clone, Copy)]
pub struct IntervalDriver {
    interval: Duration,
}

impl IntervalDriver {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_hz(hz: f64) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / hz))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Call `frame(n)` once per interval until it returns false
    ///
    /// A late frame does not cause a burst of catch-up calls. Returns the
    /// number of frames run.
    pub fn run(&self, mut frame: impl FnMut(u64) -> bool) -> u64 {
        let mut count = 0;
        let mut next = Instant::now();
        loop {
            let keep_going = frame(count);
            count += 1;
            if !keep_going {
                break;
            }
            next += self.interval;
            let now = Instant::now();
            if next > now {
                std::thread::sleep(next - now);
            } else {
                next = now;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stops_when_asked() {
        let driver = IntervalDriver::new(Duration::ZERO);
        let mut seen = Vec::new();
        let count = driver.run(|n| {
            seen.push(n);
            n < 2
        });
        assert_eq!(count, 3);
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_from_hz() {
        let driver = IntervalDriver::from_hz(50.0);
        assert_eq!(driver.interval(), Duration::from_millis(20));
    }
}
