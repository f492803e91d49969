use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::models::metrics::RequestCounter;

/// Print one cumulative-throughput sample per second until `running` drops.
///
/// The reporter reads whatever value the counter holds at wake time; there is
/// no synchronization barrier between an increment and a sample.
pub async fn run(counter: Arc<RequestCounter>, running: Arc<AtomicBool>) {
    while running.load(Ordering::Relaxed) {
        sleep(Duration::from_secs(1)).await;
        println!("{}", sample_line(counter.total(), counter.elapsed_secs()));
    }
}

/// Cumulative average since start. Called only after at least one full sleep,
/// so `elapsed_secs` is always well above zero.
pub fn sample_line(total: u64, elapsed_secs: f64) -> String {
    format!("Requests per second: {:.1}", total as f64 / elapsed_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_run_reports_zero() {
        assert_eq!(sample_line(0, 1.0), "Requests per second: 0.0");
        assert_eq!(sample_line(0, 60.0), "Requests per second: 0.0");
    }

    #[test]
    fn rate_is_count_over_elapsed() {
        assert_eq!(sample_line(100, 1.0), "Requests per second: 100.0");
        assert_eq!(sample_line(300, 2.0), "Requests per second: 150.0");
    }
}
