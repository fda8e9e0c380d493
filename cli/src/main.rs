//! CLI entrypoint for reviewng
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use reviewng_application::{
    ExportDataUseCase, ImportReportsUseCase, InspectEditUseCase, NextEditUseCase,
    ReconcileTrainingUseCase, ReviewStore, StatisticsUseCase, SubmitVoteInput, SubmitVoteUseCase,
};
use reviewng_domain::DumpScope;
use reviewng_infrastructure::{
    ConfigLoader, FileConfig, HttpReportSource, HttpTrainingSource, InMemoryReviewStore,
};
use reviewng_presentation::{Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?
    };

    let _log_guard = logging::init(cli.verbose, config.logging.dir.as_deref())?;
    info!("Starting reviewng");

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("Invalid configuration: {}", issue);
        }
        bail!("configuration has {} problem(s)", issues.len());
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `reviewng --help` for usage.");
    };

    // === Dependency Injection ===
    let store = open_store(&config).await?;

    match command {
        Command::Next { user } => {
            let edit = NextEditUseCase::new(store).execute(user).await?;
            emit(cli.output, &edit, || {
                ConsoleFormatter::format_next(user, edit.as_ref())
            });
        }
        Command::Vote {
            user,
            edit,
            classification,
            comment,
            confirm,
        } => {
            let input = SubmitVoteInput::new(user, edit, classification)
                .with_comment(comment)
                .confirmed(confirm);
            let outcome = SubmitVoteUseCase::new(store).execute(input).await?;
            emit(cli.output, &outcome, || {
                ConsoleFormatter::format_vote_outcome(&outcome)
            });
        }
        Command::Status { edit } => {
            let details = InspectEditUseCase::new(store).execute(edit).await?;
            emit(cli.output, &details, || {
                ConsoleFormatter::format_edit_details(&details)
            });
        }
        Command::Reconcile => {
            let source = HttpTrainingSource::new(
                config.training.base_url.clone(),
                &config.training.user_agent,
                config.training.timeout(),
            )?;
            let use_case = ReconcileTrainingUseCase::new(
                store,
                Arc::new(source),
                config.training.to_reconcile_params(),
            );

            let report = if cli.quiet || cli.output == OutputFormat::Json {
                use_case.execute().await?
            } else {
                use_case
                    .execute_with_progress(&ProgressReporter::new())
                    .await?
            };
            emit(cli.output, &report, || ConsoleFormatter::format_reconcile(&report));
        }
        Command::Stats => {
            let report = StatisticsUseCase::new(store).execute().await?;
            emit(cli.output, &report, || ConsoleFormatter::format_stats(&report));
        }
        Command::Export { done, training } => {
            let use_case = ExportDataUseCase::new(store);
            // Dumps are data, so they are always JSON
            if training {
                let data = use_case.trainer_export().await?;
                println!("{}", ConsoleFormatter::format_json(&data));
            } else {
                let scope = if done {
                    DumpScope::DoneOnly
                } else {
                    DumpScope::All
                };
                let dump = use_case.execute(scope).await?;
                println!("{}", ConsoleFormatter::format_json(&dump));
            }
        }
        Command::ImportReports => {
            let source = HttpReportSource::new(
                config.report.url.clone(),
                &config.training.user_agent,
                config.training.timeout(),
            )?;
            let summary = ImportReportsUseCase::new(
                store,
                Arc::new(source),
                config.report.to_import_params(),
            )
            .execute()
            .await?;
            emit(cli.output, &summary, || ConsoleFormatter::format_import(&summary));
        }
    }

    Ok(())
}

async fn open_store(config: &FileConfig) -> Result<Arc<dyn ReviewStore>> {
    let store = match config.store.snapshot_path() {
        Some(path) => {
            info!("Using review store at {}", path.display());
            InMemoryReviewStore::open(&path)
                .await
                .with_context(|| format!("failed to open review store {}", path.display()))?
        }
        None => {
            warn!("No data directory available; review state will not be saved");
            InMemoryReviewStore::new()
        }
    };
    Ok(Arc::new(store))
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) {
    match format {
        OutputFormat::Text => print!("{}", text()),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(value)),
    }
}
