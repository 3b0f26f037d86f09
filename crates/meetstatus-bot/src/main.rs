//! meetstatus CLI entry point.

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::Level;

use meetstatus_bot::cli::Cli;
use meetstatus_bot::config::BotConfig;
use meetstatus_bot::error::BotResult;
use meetstatus_core::{MessageFormatter, TracingConfig, TracingOutputFormat, init_tracing};
use meetstatus_providers::StatusQuery;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut tracing_config = if cli.debug {
        TracingConfig::debug()
    } else {
        TracingConfig::default().with_level(Level::WARN)
    };
    if cli.json_logs {
        tracing_config = tracing_config.with_format(TracingOutputFormat::Json);
    }
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // The pipeline has no fallback values; report and exit non-zero.
            tracing::error!(error = %e, "status query failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> BotResult<String> {
    let config = match cli.config {
        Some(ref path) => BotConfig::load_from(path)?,
        None => BotConfig::load()?,
    }
    .merge_cli(&cli);

    let credentials = config.credential_provider()?;
    let query = StatusQuery::new(credentials, config.query_config());
    let status = query.run().await?;

    let formatter = MessageFormatter::new(config.locale);
    Ok(formatter.render(&status, &Local))
}
