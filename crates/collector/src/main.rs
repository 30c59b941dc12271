//! Pickup metrics collector
//!
//! One-shot runner: computes time-to-first-review metrics for each
//! configured repository and emits them as JSON lines on stdout.
//! Storage and scheduling live outside this binary.

use processor::Collector;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = common::Config::from_env()?;
    if config.repositories.is_empty() {
        anyhow::bail!("no repositories configured (set REPOSITORIES=owner/name,...)");
    }

    info!(
        "Collecting pickup metrics for {} repos (lookback: {} days)",
        config.repositories.len(),
        config.lookback_days
    );

    let collector = Collector::new(config.github_token.clone(), config.lookback_days);

    for (owner, name) in &config.repositories {
        match collector.collect_repo(owner, name).await {
            Ok(metrics) => {
                info!("{}/{}: {} metrics", owner, name, metrics.len());
                for metric in &metrics {
                    println!("{}", serde_json::to_string(metric)?);
                }
            }
            Err(e) => {
                error!("Failed to collect {}/{}: {}", owner, name, e);
                // Continue with other repos
            }
        }
    }

    Ok(())
}
