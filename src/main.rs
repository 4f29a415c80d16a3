#![forbid(unsafe_code)]

//! `issue-commander`: runs the author-ownership gate for one
//! `issue_comment` webhook event.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use issue_commander::config::GlobalConfig;
use issue_commander::github::IssueCommentEvent;
use issue_commander::runner::{self, EXIT_FAILED};
use issue_commander::{AppError, Outcome, Result};

/// Environment variable holding an optional API token.
const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "issue-commander", about = "Chat-ops command gate", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to an `issue_comment` webhook payload.
    #[arg(long)]
    event: PathBuf,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_tracing(args.log_format) {
        eprintln!("{err}");
        return ExitCode::from(EXIT_FAILED);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(%err, "failed to build tokio runtime");
            return ExitCode::from(EXIT_FAILED);
        }
    };

    let result = runtime.block_on(run(&args));
    if let Ok(outcome) = &result {
        println!("{}", outcome.label());
    }
    ExitCode::from(runner::exit_status(&result))
}

async fn run(args: &Cli) -> Result<Outcome> {
    let config = match &args.config {
        Some(path) => GlobalConfig::load_from_path(path)?,
        None => GlobalConfig::default(),
    };

    let raw = std::fs::read_to_string(&args.event)
        .map_err(|err| AppError::Io(format!("cannot read event: {err}")))?;
    let event = IssueCommentEvent::from_json_str(&raw)?;
    info!(
        repo = %event.repository.full_name,
        issue = event.issue.number,
        author = %event.comment.user.login,
        "handling issue comment"
    );

    runner::handle_event(&config, &event, std::env::var(TOKEN_ENV).ok()).await
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
