//! CLI entrypoint for jobseeker
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use jobseeker_application::{AlertNotifier, JobPortalGateway, SessionContext};
use jobseeker_domain::OutputFormat;
use jobseeker_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, HttpPortalGateway, build_session_store,
};
use jobseeker_presentation::{App, Cli, Command, ConsoleAlert, LoadingIndicator, Output};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize logging based on verbosity level.
///
/// The returned guard flushes the log file on drop and must live until exit.
fn init_tracing(verbose: u8, logging: &FileLoggingConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match logging.file.as_deref().and_then(file_writer) {
        Some((writer, guard)) => (
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_filter(EnvFilter::new(level)),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::new(level)),
        )
        .with(file_layer)
        .init();

    guard
}

fn file_writer(path: &Path) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let file_name = path.file_name()?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Cannot create log directory {}: {}", dir.display(), e);
        return None;
    }
    let appender = tracing_appender::rolling::never(dir, file_name);
    Some(tracing_appender::non_blocking(appender))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    let _guard = init_tracing(cli.verbose, &config.logging);

    info!("Starting jobseeker against {}", config.api.base_url);

    // CLI flags override [output]
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .unwrap_or(config.output.format);
    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let store = build_session_store(&config.storage).context("Failed to open session store")?;
    let gateway: Arc<dyn JobPortalGateway> = Arc::new(
        HttpPortalGateway::new(&config.api.base_url, config.api.timeout())
            .context("Failed to build HTTP client")?,
    );
    let alerts: Arc<dyn AlertNotifier> = Arc::new(ConsoleAlert);

    // Resolves Unknown into LoggedIn or LoggedOut before any screen is chosen
    let session = SessionContext::init(store, alerts.clone()).await;

    let loading = if cli.quiet || format == OutputFormat::Json {
        LoadingIndicator::hidden()
    } else {
        LoadingIndicator::new(true)
    };

    let mut app = App::new(
        session,
        gateway,
        config.api.to_portal_params(),
        alerts,
        Output::new(format),
        loading,
    );

    let command = cli.command.unwrap_or(Command::Status);
    // The log guard has to drop before the process ends
    match app.execute(command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            warn!("Command failed: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
