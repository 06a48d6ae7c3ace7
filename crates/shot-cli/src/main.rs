use anyhow::Context;
use clap::Parser;
use shot_core::CoreError;

mod bootstrap;
mod cli;
mod output;
mod pipeline;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{}", output::failure_message(&error));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let path = cli.path.ok_or(CoreError::MissingInput)?;
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = bootstrap::load_config(&cwd)?;
    let path = pipeline::project_relative(&path, &cwd);

    match pipeline::run(&path, &config, cli.dry_run).await? {
        pipeline::Outcome::Written { fixture, test } => {
            println!("{}", output::success_message(&fixture, &test));
        }
        pipeline::Outcome::DryRun(artifacts) => {
            print!("{}", output::dry_run_listing(&artifacts));
        }
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PROPSHOT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
