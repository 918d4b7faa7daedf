use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use policyradar_common::Config;
use policyradar_harvest::PolicyRadar;

/// PolicyRadar — Indian policy news aggregator.
#[derive(Parser, Debug)]
#[command(name = "policyradar", version, about)]
struct Cli {
    /// Worker pool size
    #[arg(long, default_value_t = 6)]
    workers: usize,

    /// Output HTML path
    #[arg(long, default_value = "docs/index.html")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Search stored articles and print the top matches (no HTML generation)
    #[arg(long)]
    search: Option<String>,

    /// Restrict the rendered output to one category
    #[arg(long)]
    filter: Option<String>,

    /// Also emit the JSON API dump
    #[arg(long)]
    export: bool,

    /// Clear the article hash cache and prune old stored articles first
    #[arg(long)]
    clear_cache: bool,

    /// Fetch a single hard-coded feed and print the result
    #[arg(long)]
    test: bool,

    /// Disable duplicate suppression for this run
    #[arg(long)]
    fresh: bool,

    /// Cap on the number of feeds processed
    #[arg(long)]
    max_feeds: Option<usize>,

    /// Cap on the number of articles collected
    #[arg(long, default_value_t = 200)]
    max_articles: usize,
}

fn init_logging(config: &Config) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(&config.logs_dir, "policyradar.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let default_directive = if config.debug { "policyradar=debug" } else { "policyradar=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new(
        cli.workers,
        cli.output,
        cli.debug,
        cli.export,
        cli.fresh,
        cli.max_feeds,
        cli.max_articles,
    );

    // Directories first: the log file lives under logs/
    config.ensure_directories()?;
    let _log_guard = init_logging(&config);

    info!(ci_mode = config.ci_mode, workers = config.workers, "PolicyRadar starting");

    let radar = PolicyRadar::new(config).await?;

    if cli.clear_cache {
        radar.clear_cache().await;
    }

    if let Some(query) = &cli.search {
        radar.search(query).await;
        return Ok(());
    }

    if cli.test {
        radar.test_single_feed().await;
        return Ok(());
    }

    // A failed run still renders; the process exits success either way so
    // downstream publishing can proceed
    match radar.run(cli.filter.as_deref()).await {
        Ok(output) => {
            let stats = radar.stats_handle();
            let stats = stats.lock().await;
            println!("\n=== PolicyRadar Summary ===");
            println!("Total articles collected: {}", stats.total_articles);
            println!(
                "Feeds succeeded: {}/{} ({:.0}%)",
                stats.successful_feeds,
                stats.total_feeds,
                stats.success_rate()
            );
            println!("Output generated: {}", output.display());
            println!("Health dashboard: docs/health.html");
            if stats.success_rate() < 50.0 {
                println!("\nWARNING: under half the feeds succeeded. See health.html.");
            }
        }
        Err(e) => {
            error!(error = %e, "Aggregation failed, emitting minimal output");
            let _ = radar.emit_minimal_page(
                "PolicyRadar System Error",
                "Our aggregation system encountered an error. We're working to resolve this.",
            );
        }
    }

    Ok(())
}
