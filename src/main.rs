//! CLI entry point for aur-talk.

mod cli;

use std::time::Duration;

use aur_talk::app::{render_options, run};
use aur_talk::config::load_config;
use aur_talk::error::AppError;
use aur_talk::fetch::AurClient;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directives.
const LOG_ENV: &str = "AUR_TALK_LOG";

#[tokio::main]
async fn main() {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        // Prints help/version to stdout with exit 0, usage errors to stderr.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    init_tracing();

    // Load config.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", AppError::from(e));
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    args.apply_overrides(&mut config);

    let client = AurClient::new(
        config.fetch.base_url.clone(),
        Duration::from_secs(config.fetch.timeout_secs),
    );
    let request = args.request(&config);
    let options = render_options(&config.display, args.filter());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&client, &request, options, &mut out).await {
        Ok(notice) => {
            if let Some(notice) = notice {
                tracing::debug!(?notice, "finished with notice");
            }
        }
        Err(e) if e.is_not_found() => {
            println!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
