//! Heartseal CLI
//!
//! Thin wrapper around heartseal-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Create a shareable link
//! heartseal create --recipient Alex --sender Jamie --password secret
//!
//! # See what a link opens to
//! heartseal open "https://heartseal.local/?q=Will+you%3F&r=Alex&s=Jamie"
//!
//! # Try the secret code
//! heartseal unlock <link> --password secret
//!
//! # Say yes
//! heartseal accept <link>
//!
//! # Print the decree, with a blessing
//! heartseal certificate <link> --bless
//!
//! # Show or initialise the configuration
//! heartseal config show
//! heartseal config init
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use heartseal_core::blessing::source_from_config;
use heartseal_core::config::CONFIG_FILE;
use heartseal_core::link::{accepted_url, parse_link, query_of, share_url, DecodedLink};
use heartseal_core::logging::{init_logging, LogOptions};
use heartseal_core::{fetch_blessing, verify, Certificate, ExperienceConfig, Flow, ProposalDetails};

/// Exit code for `unlock --strict` when the password is wrong
const EXIT_DENIED: i32 = 2;

/// Heartseal - personalised proposal links
#[derive(Parser)]
#[command(name = "heartseal")]
#[command(version = "0.1.0")]
#[command(about = "Heartseal - personalised proposal links")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config directory (default: ~/.config/heartseal)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Also write a JSONL session log into this directory
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a shareable proposal link
    Create {
        /// The question (default from config)
        #[arg(short, long)]
        question: Option<String>,
        /// Who the proposal is for
        #[arg(short, long)]
        recipient: Option<String>,
        /// Who is asking
        #[arg(short, long)]
        sender: Option<String>,
        /// Secret code the recipient must enter first
        #[arg(short, long)]
        password: Option<String>,
        /// Origin and path the link is built on
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show which screen a link opens and what it carries
    Open {
        link: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a password against a link
    Unlock {
        link: String,
        #[arg(short, long)]
        password: String,
        /// Exit with code 2 when access is denied
        #[arg(long)]
        strict: bool,
    },

    /// Print the link with the accepted flag set
    Accept { link: String },

    /// Print the acceptance certificate for a link
    Certificate {
        link: String,
        /// Append a blessing (falls back to a fixed text offline)
        #[arg(long)]
        bless: bool,
        /// Year stamped on the seal (default: this year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the resolved configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(
        LogOptions::new("cli")
            .verbosity(cli.verbose)
            .with_logs_dir(cli.logs_dir.clone()),
    )?;

    let config_dir = cli.config_dir.unwrap_or_else(ExperienceConfig::default_dir);
    let config = ExperienceConfig::load(&config_dir)?;
    tracing::debug!(dir = %config_dir.display(), "Loaded configuration");

    match cli.command {
        Commands::Create {
            question,
            recipient,
            sender,
            password,
            base_url,
        } => {
            let details = ProposalDetails::new(
                question.unwrap_or_else(|| config.default_question.clone()),
                recipient.unwrap_or_else(|| config.default_recipient.clone()),
                sender.unwrap_or_else(|| config.default_sender.clone()),
            )
            .with_password(password.unwrap_or_default());

            let base = base_url.unwrap_or_else(|| config.base_url.clone());
            let url = share_url(&base, &details)?;
            tracing::info!(gated = details.is_gated(), "Created proposal link");
            println!("{}", url);
        }

        Commands::Open { link, json } => {
            let flow = Flow::initial(&query_of(&link));
            let decoded = parse_link(&link);

            if json {
                let value = serde_json::json!({
                    "screen": flow.screen().as_str(),
                    "details": flow.details(),
                    "accepted": decoded.as_ref().is_some_and(|d| d.accepted),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Screen: {}", flow.screen());
                if let Some(DecodedLink { details, accepted }) = decoded {
                    println!("  Question: {}", details.question);
                    println!("  Recipient: {}", details.recipient);
                    println!("  Sender: {}", details.sender);
                    println!(
                        "  Password: {}",
                        if details.is_gated() { "required" } else { "none" }
                    );
                    println!("  Accepted: {}", if accepted { "yes" } else { "no" });
                }
            }
        }

        Commands::Unlock {
            link,
            password,
            strict,
        } => {
            let decoded = require_proposal(&link)?;
            if !decoded.details.is_gated() {
                println!("No password required");
            }

            let access = verify(decoded.details.password.as_deref(), &password);
            if access.is_granted() {
                println!("Access granted");
            } else {
                tracing::info!("Password did not match");
                println!("Access denied");
                if strict {
                    std::process::exit(EXIT_DENIED);
                }
            }
        }

        Commands::Accept { link } => {
            let url = accepted_url(&link)?;
            println!("{}", url);
        }

        Commands::Certificate { link, bless, year } => {
            let decoded = require_proposal(&link)?;
            let details = &decoded.details;
            let certificate = match year {
                Some(year) => Certificate::new(details, year),
                None => Certificate::for_details(details),
            };
            println!("{}", certificate.render_text());

            if bless {
                let source = source_from_config(&config.blessing);
                let blessing = fetch_blessing(
                    source.as_ref(),
                    &details.sender,
                    &details.recipient,
                    config.blessing.timeout(),
                )
                .await;
                println!();
                println!("{}", blessing);
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let mut shown = config.clone();
                if shown.blessing.api_key.is_some() {
                    shown.blessing.api_key = Some("<redacted>".to_string());
                }
                println!("{}", serde_json::to_string_pretty(&shown)?);
            }
            ConfigAction::Init { force } => {
                let path = config_dir.join(CONFIG_FILE);
                if path.exists() && !force {
                    println!("Config already exists: {}", path.display());
                    println!("To overwrite, run: heartseal config init --force");
                } else {
                    let written = ExperienceConfig::default().save(&config_dir)?;
                    println!("Wrote {}", written.display());
                }
            }
        },
    }

    Ok(())
}

/// Decode a link or fail with a readable message.
fn require_proposal(link: &str) -> Result<DecodedLink> {
    parse_link(link).context("Link does not carry a complete proposal (need q, r and s)")
}
