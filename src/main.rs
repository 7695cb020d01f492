//! help-center-articles CLI
//!
//! Exports Help Center articles to stdout (or HTML files).

use clap::Parser;
use help_center_articles::cli::{Cli, ExitCode, Runner};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the export
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    match runner.run().await {
        Ok(_) => ExitCode::Ok.into(),
        // Reader went away (e.g. `| head`); nothing left to report
        Err(e) if e.is_broken_pipe() => ExitCode::Error.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::Error.into()
        }
    }
}
