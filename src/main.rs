#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod launcher;
mod pages;
mod theme;
mod timers;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use invitation_core::InvitationConfig;
use tracing_subscriber::EnvFilter;

/// Global invitation config, loaded once at startup
static CONFIG: OnceLock<InvitationConfig> = OnceLock::new();

/// Get the invitation config (loaded from disk or built-in defaults)
pub fn get_config() -> InvitationConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Store the startup config. Returns false if one was already installed;
/// the first config stays in effect.
fn install_config(config: InvitationConfig) -> bool {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Invitation config already installed, ignoring replacement");
        return false;
    }
    true
}

/// Animated party invitation with RSVP
#[derive(Parser, Debug)]
#[command(name = "invitation-desktop")]
#[command(about = "Animated party invitation with a multi-step RSVP wizard")]
struct Args {
    /// Invitation config file (JSON); defaults to <config dir>/invitation/invitation.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = InvitationConfig::load_or_default(args.config.as_deref())
        .context("failed to load invitation config")?;

    let title = config.event.headline.clone();
    tracing::info!(
        "Starting invitation '{}' (RSVP to {})",
        config.event.party_title,
        config.recipient
    );

    install_config(config);

    // Portrait window, like a phone held upright
    let window_width = 480.0;
    let window_height = 900.0;

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_config_is_ignored() {
        let first = InvitationConfig::default();
        let mut second = InvitationConfig::default();
        second.recipient = "15551234567".to_string();

        assert!(install_config(first.clone()));
        assert!(!install_config(second));
        assert_eq!(get_config(), first);
    }
}
