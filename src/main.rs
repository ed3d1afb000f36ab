use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use style_grade::cli::{Cli, Commands};
use style_grade::commands::{run_catalog, run_check, run_init};

/// Log filter when `RUST_LOG` is unset; `-vv` and above turn on debug events.
const fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 | 1 => "warn",
        2 => "style_grade=debug",
        _ => "style_grade=trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Catalog => run_catalog(),
    };

    std::process::exit(exit_code);
}
