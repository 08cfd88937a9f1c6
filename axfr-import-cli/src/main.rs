//! axfr-import entry point
//!
//! Reads an AXFR transfer on stdin, makes sure the hosted zone exists, submits
//! every record set in one change batch and prints the change status until
//! Route 53 reports `INSYNC`.

mod cli;
mod exit;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use axfr_import_core::zonefile::read_record_sets;
use axfr_import_core::{build_change_batch, ConvergencePoller, CoreResult, ZoneService};
use axfr_import_provider::{HostedZoneProvider, Route53Provider};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr, status lines to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_expected() {
                tracing::warn!("{e}");
            } else {
                tracing::error!("{e}");
            }
            ExitCode::from(exit::exit_code(&e))
        }
    }
}

async fn run(cli: Cli) -> CoreResult<()> {
    let record_sets = read_record_sets(std::io::stdin().lock())?;
    tracing::info!(
        "Read {} record sets ({})",
        record_sets.len(),
        record_sets.summary()
    );

    let batch = build_change_batch(record_sets, cli.change_action(), cli.comment.clone());

    if cli.dry_run {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &batch).map_err(std::io::Error::from)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let provider = build_provider(&cli);

    let zone = ZoneService::new(Arc::clone(&provider))
        .require_zone(&cli.domain)
        .await?
        .into_zone();
    tracing::info!("Importing into hosted zone {} ({})", zone.name, zone.id);

    if batch.is_empty() {
        tracing::warn!("No importable records on standard input, submitting an empty change batch");
    }

    let poller = ConvergencePoller::new(provider, cli.poll_options());
    let info = poller
        .submit_and_wait(
            &zone.id,
            &batch,
            |info| println!("{}", info.status),
            shutdown_signal(),
        )
        .await?;

    tracing::info!("Change {} is {}", info.id, info.status);
    Ok(())
}

fn build_provider(cli: &Cli) -> Arc<dyn HostedZoneProvider> {
    let mut builder = Route53Provider::builder(cli.access_key.clone(), cli.secret_key.clone())
        .max_retries(cli.max_retries);
    if let Some(endpoint) = &cli.endpoint {
        builder = builder.endpoint(endpoint.as_str());
    }
    Arc::new(builder.build())
}

/// Completes on Ctrl-C; never completes if the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
