//! Bravonest CLI
//!
//! Operator tooling around bravonest-core: check a site config, preview the
//! mail an enquiry would produce, and push a test enquiry through the
//! delivery chain.
//!
//! ## Usage
//!
//! ```bash
//! # Validate a config file and show the delivery chain
//! bravonest --config site.toml check-config
//!
//! # Show subject, body and mailto link for a project call request
//! bravonest preview project --name "Ada" --email ada@example.com \
//!     --type software --description "Firmware for a sensor board"
//!
//! # Send a course enquiry through the configured relays
//! bravonest send course --name "Ada" --email ada@example.com --course pcb
//! ```

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use bravonest_core::config::ConfigOverrides;
use bravonest_core::dispatch::{EMAILJS, FORMSUBMIT, MAILTO};
use bravonest_core::{
    mailto_url, CourseForm, DispatchOutcome, EmailDispatcher, EnquiryForm, FormPayload,
    HttpTransport, MailClient, ProjectForm, SiteConfig, SiteResult,
};
use clap::{Parser, Subcommand};

/// Bravonest - site operator tools
#[derive(Parser)]
#[command(name = "bravonest")]
#[command(version = "0.1.0")]
#[command(about = "Bravonest - site operator tools")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Site config file (default: built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the config and list the delivery chain
    CheckConfig,

    /// Print the subject, body and mailto link for an enquiry
    Preview {
        #[command(subcommand)]
        enquiry: EnquiryArgs,
    },

    /// Send an enquiry through the delivery chain
    Send {
        #[command(subcommand)]
        enquiry: EnquiryArgs,
    },
}

/// Form fields as typed on the command line. Missing values stay empty so
/// the form validation reports them, same as on the site.
#[derive(Subcommand)]
enum EnquiryArgs {
    /// Project call request
    Project {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// software, pcb or both
        #[arg(long = "type", default_value = "")]
        project_type: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        time_window: String,
    },

    /// Course enquiry
    Course {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// electronics, programming, pcb, embedded or custom
        #[arg(long, default_value = "")]
        course: String,
        #[arg(long, default_value = "")]
        message: String,
    },
}

impl EnquiryArgs {
    fn into_form(self) -> Box<dyn EnquiryForm> {
        match self {
            EnquiryArgs::Project {
                name,
                email,
                project_type,
                description,
                time_window,
            } => Box::new(ProjectForm {
                name,
                email,
                project_type,
                description,
                time_window,
            }),
            EnquiryArgs::Course {
                name,
                email,
                course,
                message,
            } => Box::new(CourseForm {
                name,
                email,
                course,
                message,
            }),
        }
    }
}

/// Mail client for a terminal: prints the link instead of opening it
struct PrintMailClient;

impl MailClient for PrintMailClient {
    fn open(&self, url: &str) -> SiteResult<()> {
        println!("Open in your mail client:");
        println!("  {}", url);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::CheckConfig => {
            print_config(&config, cli.config.as_deref());
        }

        Commands::Preview { enquiry } => {
            let payload = validate(enquiry)?;
            let subject = payload.subject();
            let body = payload.body(&config.contact.site_name);

            println!("To: {}", config.contact.recipient);
            println!("Reply-To: {} <{}>", payload.sender_name(), payload.sender_email());
            println!("Subject: {}", subject);
            println!();
            println!("{}", body);
            println!();
            println!("mailto link:");
            println!("  {}", mailto_url(&config.contact.recipient, &subject, &body));
        }

        Commands::Send { enquiry } => {
            let payload = validate(enquiry)?;
            let dispatcher = EmailDispatcher::from_config(
                &config,
                Rc::new(HttpTransport::new()),
                Rc::new(PrintMailClient),
            );
            tracing::info!("Delivery chain: {:?}", dispatcher.chain());

            let outcome = dispatcher
                .dispatch(&payload)
                .await
                .context("Enquiry could not be sent")?;
            println!("{}", describe_outcome(&outcome));
        }
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Config from `path` (or the defaults), with relay secrets from the
/// environment layered on top
fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let config = match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SiteConfig::default(),
    };
    Ok(config.with_overrides(ConfigOverrides::from_env()))
}

fn validate(enquiry: EnquiryArgs) -> Result<FormPayload> {
    match enquiry.into_form().validate() {
        Ok(payload) => Ok(payload),
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("  {}: {}", error.field, error.message);
            }
            bail!("Invalid enquiry: {}", errors.summary())
        }
    }
}

fn print_config(config: &SiteConfig, path: Option<&Path>) {
    let configured = config.configured_relays();
    let status = |provider: &str| {
        if configured.contains(&provider) {
            "configured"
        } else {
            "not configured"
        }
    };

    println!("Bravonest site configuration");
    match path {
        Some(path) => println!("  Source: {}", path.display()),
        None => println!("  Source: built-in defaults"),
    }
    println!("  Recipient: {}", config.contact.recipient);
    println!("  Site name: {}", config.contact.site_name);
    println!();
    println!("Delivery chain:");
    println!("  1. {} ({})", FORMSUBMIT, status(FORMSUBMIT));
    println!("  2. {} ({})", EMAILJS, status(EMAILJS));
    println!("  3. {} (always available)", MAILTO);
    println!();

    let effects = &config.effects;
    println!("Effects:");
    println!("  typing_speed_ms: {}", effects.typing_speed_ms);
    println!("  cursor_ease: {}", effects.cursor_ease);
    println!("  tilt_max_deg: {}", effects.tilt_max_deg);
    println!("  tilt_scale: {}", effects.tilt_scale);
    println!("  reveal_threshold: {}", effects.reveal_threshold);
    println!("  route_scroll_delay_ms: {}", effects.route_scroll_delay_ms);
    println!();
    println!("Config OK");
}

fn describe_outcome(outcome: &DispatchOutcome) -> String {
    match outcome {
        DispatchOutcome::Delivered { provider } => format!("Delivered via {}", provider),
        DispatchOutcome::HandedOff { provider } => {
            format!("No relay accepted the enquiry; handed off via {}", provider)
        }
    }
}
