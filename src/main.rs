use anyhow::Result;

use finnews_synth::cli::{run_cli, split_config_arg};
use finnews_synth::config::Config;
use finnews_synth::random::SharedRng;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, command_args) = split_config_arg(&args)?;

    let config = match Config::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so stdout carries only the JSON payload.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.logging.level.as_str())
            }),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        seed = ?config.generator.seed,
        interval_minutes = config.generator.interval_minutes,
        "Starting finnews-synth"
    );

    let rng = SharedRng::new(config.generator.seed);
    let stdout = std::io::stdout();
    run_cli(command_args, &config, &rng, stdout.lock())
}
