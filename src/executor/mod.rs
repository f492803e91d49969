use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hyper::StatusCode;
use tokio::task::{self, JoinHandle};
use tokio::time::timeout;
use tracing::warn;

use crate::client::{send_request, ClientError, HttpsClient};
use crate::models::metrics::RequestCounter;
use crate::models::run_config::RunConfig;

/// Where workers write their non-200 diagnostic lines. The binary points
/// this at stdout; tests capture the lines instead.
pub type DiagnosticSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Spawn one looping task per configured worker, diagnostics going to stdout.
///
/// Handles are returned so the orchestrator can join them once the `running`
/// flag drops. Workers are unordered and interchangeable.
pub fn spawn_workers(
    client: Arc<HttpsClient>,
    config: Arc<RunConfig>,
    counter: Arc<RequestCounter>,
    running: Arc<AtomicBool>,
) -> Vec<JoinHandle<()>> {
    let sink: DiagnosticSink = Arc::new(|line: &str| println!("{line}"));
    spawn_workers_with_sink(client, config, counter, running, sink)
}

pub fn spawn_workers_with_sink(
    client: Arc<HttpsClient>,
    config: Arc<RunConfig>,
    counter: Arc<RequestCounter>,
    running: Arc<AtomicBool>,
    sink: DiagnosticSink,
) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::with_capacity(config.worker_count);

    for id in 0..config.worker_count {
        let client = Arc::clone(&client);
        let config = Arc::clone(&config);
        let counter = Arc::clone(&counter);
        let running = Arc::clone(&running);
        let sink = Arc::clone(&sink);

        handles.push(task::spawn(async move {
            worker_loop(id, &client, &config, &counter, &running, &sink).await;
        }));
    }

    handles
}

async fn worker_loop(
    id: usize,
    client: &HttpsClient,
    config: &RunConfig,
    counter: &RequestCounter,
    running: &AtomicBool,
    sink: &DiagnosticSink,
) {
    let uri = match crate::client::target_uri(&config.target) {
        Ok(uri) => uri,
        Err(err) => {
            warn!(worker = id, %err, "worker exiting before first request");
            return;
        }
    };

    while running.load(Ordering::Relaxed) {
        let result = match config.timeout {
            Some(deadline) => match timeout(deadline, send_request(client, &uri)).await {
                Ok(result) => result,
                Err(_) => Err(ClientError::Timeout),
            },
            None => send_request(client, &uri).await,
        };

        match result {
            Ok(status) => {
                if let Some(line) = diagnostic_for(status) {
                    sink(&line);
                }
                counter.record();
            }
            Err(err) => {
                // Transport failure kills this worker only; siblings keep going.
                warn!(worker = id, %err, "worker terminated by transport failure");
                return;
            }
        }
    }
}

/// Stdout line for a non-success response; a 200 stays quiet.
fn diagnostic_for(status: StatusCode) -> Option<String> {
    if status == StatusCode::OK {
        None
    } else {
        Some(format!("Error: {}", status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_silent() {
        assert_eq!(diagnostic_for(StatusCode::OK), None);
    }

    #[test]
    fn non_success_names_the_exact_code() {
        assert_eq!(
            diagnostic_for(StatusCode::INTERNAL_SERVER_ERROR).as_deref(),
            Some("Error: 500")
        );
        assert_eq!(
            diagnostic_for(StatusCode::NOT_FOUND).as_deref(),
            Some("Error: 404")
        );
    }
}
