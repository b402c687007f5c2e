#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use heartseal_core::logging::{init_logging, LogOptions};
use heartseal_core::{ExperienceConfig, IntroMode};

/// Startup settings resolved from flags and the config file
#[derive(Debug, Clone)]
pub struct Launch {
    /// Plays the role of the browser location
    pub link: String,
    pub config: ExperienceConfig,
}

static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Startup settings (set once in `main`).
pub fn launch() -> Launch {
    LAUNCH.get().cloned().unwrap_or_else(|| {
        let config = ExperienceConfig::default();
        Launch {
            link: config.base_url.clone(),
            config,
        }
    })
}

/// Heartseal - a proposal they can't say no to
#[derive(Parser, Debug)]
#[command(name = "heartseal-desktop")]
#[command(about = "Heartseal - a proposal they can't say no to")]
struct Args {
    /// Proposal link to open (omit to start on the setup form)
    #[arg(short, long)]
    link: Option<String>,

    /// Go straight to the proposal after creating it
    #[arg(long)]
    no_intro: bool,

    /// Config directory (default: ~/.config/heartseal)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Also write a JSONL session log into this directory
    #[arg(long)]
    logs_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match init_logging(LogOptions::new("desktop").with_logs_dir(args.logs_dir.clone())) {
        Ok(Some(path)) => tracing::info!("Session log: {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    let config_dir = args
        .config_dir
        .unwrap_or_else(ExperienceConfig::default_dir);
    let mut config = ExperienceConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {}", e);
        ExperienceConfig::default()
    });
    if args.no_intro {
        config.intro = IntroMode::Skip;
    }

    let link = args.link.unwrap_or_else(|| config.base_url.clone());
    tracing::info!(intro = ?config.intro, "Starting Heartseal");
    let _ = LAUNCH.set(Launch { link, config });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Heartseal")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
