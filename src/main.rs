use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Local;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use loadrunner::models::metrics::RequestCounter;
use loadrunner::models::run_config::RunConfig;
use loadrunner::{client, executor, reporter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let config = Arc::new(RunConfig::default());
    let client = Arc::new(client::build_client());
    let counter = Arc::new(RequestCounter::new());
    let running = Arc::new(AtomicBool::new(true));

    // stdout is reserved for the protocol lines; everything operator-facing
    // goes to stderr next to the tracing output.
    eprintln!(
        "{} {} {} {}",
        "target :".blue().bold(),
        config.target.bold(),
        "| workers :".blue().bold(),
        config.worker_count.to_string().bold()
    );
    info!(
        started = %Local::now().format("%Y/%m/%d %H:%M:%S"),
        workers = config.worker_count,
        "load run starting"
    );

    {
        let running = Arc::clone(&running);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                running.store(false, Ordering::Relaxed);
            }
        });
    }

    let handles = executor::spawn_workers(
        Arc::clone(&client),
        Arc::clone(&config),
        Arc::clone(&counter),
        Arc::clone(&running),
    );

    // Workers are all up before the first sample; this loop holds the main
    // task until Ctrl-C drops the flag.
    reporter::run(Arc::clone(&counter), Arc::clone(&running)).await;

    // Workers still blocked on an in-flight response are cut loose, then joined.
    for handle in handles.iter() {
        handle.abort();
    }
    for handle in handles {
        let _ = handle.await;
    }

    eprintln!();
    eprintln!("{}", "======== RUN SUMMARY ========".bold());
    eprintln!(
        "{} {}",
        "total requests :".green().bold(),
        counter.total().to_string().bold()
    );
    eprintln!(
        "{} {}",
        "elapsed (s)    :".blue().bold(),
        format!("{:.1}", counter.elapsed_secs()).bold()
    );
    eprintln!(
        "{} {}",
        "average rps    :".blue().bold(),
        format!("{:.1}", counter.throughput()).bold()
    );

    Ok(())
}
