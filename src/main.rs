use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wavrec::{Cli, Commands, Verbosity};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    init_tracing(verbosity);

    match cli.command {
        Commands::Record(args) => wavrec::commands::record::run(args, verbosity),
        Commands::Inspect(args) => wavrec::commands::inspect::run(args),
        Commands::Completions(args) => {
            wavrec::commands::completions::run(args);
            Ok(())
        }
    }
}

fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
