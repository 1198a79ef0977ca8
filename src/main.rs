use anyhow::{Context, Result};
use clap::Parser;
use lanscout::cli::{load_settings, Cli, Commands, ScanCommand};
use lanscout::output;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Info(cmd)) => cmd.execute(cli.quiet).context("info command failed"),
        Some(Commands::Config(cmd)) => cmd
            .execute(config_path, cli.quiet)
            .context("config command failed"),
        Some(Commands::Scan(cmd)) => {
            let settings = load_settings(config_path).context("failed to load settings")?;
            cmd.execute(&settings, cli.verbose, cli.quiet)
                .await
                .context("scan failed")
        }
        None => {
            let settings = load_settings(config_path).context("failed to load settings")?;
            ScanCommand::default()
                .execute(&settings, cli.verbose, cli.quiet)
                .await
                .context("scan failed")
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over the verbosity flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
