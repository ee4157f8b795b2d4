use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = strman::cli::Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = strman::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
