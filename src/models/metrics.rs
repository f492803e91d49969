use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Completed-response tally shared by every worker and the reporter.
///
/// One increment per HTTP response received, whatever its status code.
/// In-flight requests are never reflected, and the count never decreases.
/// Relaxed ordering is enough: nothing sequences on the counter, only the
/// magnitude is observed.
pub struct RequestCounter {
    total: AtomicU64,
    started: Instant,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    pub fn record(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Wall-clock seconds since the counter was created.
    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Cumulative requests per second since start, not a sliding window.
    pub fn throughput(&self) -> f64 {
        self.total() as f64 / self.elapsed_secs()
    }
}

impl Default for RequestCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_every_completion() {
        let counter = RequestCounter::new();
        counter.record();
        counter.record();
        counter.record();
        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn throughput_is_zero_without_traffic() {
        let counter = RequestCounter::new();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert_eq!(counter.throughput(), 0.0);
    }
}
