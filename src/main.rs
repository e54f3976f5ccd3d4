//! CLI entry point for the student result calculator.
//!
//! `calculate` submits one mark sheet to the result endpoint (falling back to
//! a local computation) and prints the result card. `serve` runs the
//! endpoint itself.

use anyhow::Result;
use clap::{Parser, Subcommand};
use srms::config::Config;
use srms::form::FormPayload;
use srms::infra::remote::RemoteResultClient;
use srms::output::{print_pretty, render_card, render_json};
use srms::server::run_server;
use srms::services::{Outcome, calculate_with_fallback};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "srms")]
#[command(about = "Calculate student totals, percentages and grades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate one student's result
    Calculate {
        /// Student name
        #[arg(long)]
        name: String,

        /// Roll number
        #[arg(long)]
        roll: String,

        /// Mathematics mark (0-100)
        #[arg(long, allow_hyphen_values = true)]
        math: String,

        /// Physics mark (0-100)
        #[arg(long, allow_hyphen_values = true)]
        physics: String,

        /// Chemistry mark (0-100)
        #[arg(long, allow_hyphen_values = true)]
        chemistry: String,

        /// English mark (0-100)
        #[arg(long, allow_hyphen_values = true)]
        english: String,

        /// Computer Science mark (0-100)
        #[arg(long, allow_hyphen_values = true)]
        cs: String,

        /// Result endpoint URL (overrides SRMS_ENDPOINT)
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Skip the endpoint and calculate locally
        #[arg(long, default_value_t = false)]
        local: bool,

        /// Print the outcome as JSON instead of a result card
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Serve the result endpoint at /api/calculate
    Serve {
        /// Interface to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let config = Config::from_env()?;
    let _file_guard = init_tracing(&config.log_file_path)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            name,
            roll,
            math,
            physics,
            chemistry,
            english,
            cs,
            endpoint,
            local,
            json,
        } => {
            let marks = [
                math.as_str(),
                physics.as_str(),
                chemistry.as_str(),
                english.as_str(),
                cs.as_str(),
            ];
            let form = FormPayload::new(&name, &roll, marks);
            if let Err(e) = form.validate() {
                error!(error = %e, "Marks rejected");
                anyhow::bail!("Please enter valid marks between 0 and 100 for all subjects. ({e})");
            }

            let endpoint = if local {
                None
            } else {
                endpoint.or_else(|| config.endpoint.clone())
            };
            let outcome = calculate(&config, endpoint.as_deref(), &form).await;

            print_pretty(&outcome.record);
            if json {
                println!("{}", render_json(&outcome)?);
            } else {
                print!("{}", render_card(&outcome.record));
            }
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.host.clone());
            let port = port.unwrap_or(config.port);
            run_server(&host, port).await?;
        }
    }

    Ok(())
}

/// Gets a result from `endpoint` when one is given, locally otherwise.
#[tracing::instrument(skip(config, form))]
async fn calculate(config: &Config, endpoint: Option<&str>, form: &FormPayload) -> Outcome {
    let Some(endpoint) = endpoint else {
        info!("No endpoint configured, calculating locally");
        return Outcome::local(form);
    };

    match RemoteResultClient::new(endpoint, config.request_timeout) {
        Ok(api) => calculate_with_fallback(&api, form).await,
        Err(e) => {
            warn!(error = %e, "Cannot use endpoint, calculating locally");
            Outcome::local(form)
        }
    }
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing(log_file_path: &Path) -> Result<WorkerGuard> {
    let log_dir = log_file_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("srms.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}
