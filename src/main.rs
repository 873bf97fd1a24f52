use anyhow::Result;
use clap::Parser;
use log::info;

use mkplamobuild::cli;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    info!("Starting mkplamobuild v{}", env!("CARGO_PKG_VERSION"));

    cli::run(args)
}
