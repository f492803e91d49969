use std::time::Duration;

/// Number of concurrent workers issuing requests.
pub const WORKER_COUNT: usize = 150;

/// Health-check endpoint every worker targets.
pub const TARGET_URL: &str = "http://127.0.0.1:3001/health";

/// Parameters of one load run, fixed at process start.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: String,
    pub worker_count: usize,
    /// Per-request deadline. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target: TARGET_URL.to_string(),
            worker_count: WORKER_COUNT,
            timeout: None,
        }
    }
}
