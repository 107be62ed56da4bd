use clap::Parser;
use std::path::Path;

use strkit::cli::{self, Args};
use strkit::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_target(true)
        .init();

    log::debug!(
        "Loaded config: salt set = {}, default length = {}",
        !config.password_salt.is_empty(),
        config.default_password_length
    );

    let outcome = cli::handlers::run(&args, &config);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.json)?);
    } else {
        println!("{}", outcome.text);
    }

    if !outcome.passed {
        std::process::exit(1);
    }

    Ok(())
}
