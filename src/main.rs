use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod distance;
mod extract;
mod preprocess;
mod scoring;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fuzzmatch=debug,info")
    } else {
        EnvFilter::new("fuzzmatch=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Distance(args) => {
            cli::distance::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Score(args) => {
            cli::score::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Extract(args) => {
            cli::extract::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
