use anyhow::Result;
use clap::Parser;
use preflight::ConfigSnapshot;
use preflight_cli::{run, Args};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigSnapshot::from_env();
    let response = run(&args, &config)?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
