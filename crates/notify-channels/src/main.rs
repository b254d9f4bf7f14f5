//! notify-channels CLI
//!
//! Sends one message through every channel listed in a configuration file.

use std::path::PathBuf;

use clap::Parser;
use notify_channels::{dispatch_all, load_config, Config, Delivery, Transports};
use tracing::Level;

#[derive(Parser)]
#[command(name = "notify-channels")]
#[command(about = "Send a notification through beep, Notification Center, Slack, Discord or LINE")]
#[command(version)]
struct Args {
    /// Message to send (overrides any message in the configuration file)
    message: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail with a non-zero exit code when a channel cannot be reached
    #[arg(long)]
    strict: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, strict={}, log_level={:?}",
        args.config,
        args.strict,
        args.log_level
    );

    let config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if config.notifiers.is_empty() {
        tracing::info!("No notifiers configured, nothing to send");
        return Ok(());
    }

    let notifiers = config.build_notifiers(args.message.as_deref(), &Transports::system())?;

    let delivery = if args.strict {
        Delivery::Checked
    } else {
        Delivery::FireAndForget
    };
    dispatch_all(&notifiers, delivery)?;

    Ok(())
}
