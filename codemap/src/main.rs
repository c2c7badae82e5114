use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        2.. => "trace",
    };

    // Logs go to stderr; stdout belongs to the hook/summary output.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    match cli.command {
        Commands::Hook(args) => {
            // The hook must never fail the caller, whatever happened inside.
            runtime.block_on(cli::commands::hook::execute(args));
        }
        Commands::Scan(args) => {
            runtime.block_on(cli::commands::scan::execute(args))?;
        }
        Commands::Summary(args) => {
            runtime.block_on(cli::commands::summary::execute(args))?;
        }
    }

    Ok(())
}
