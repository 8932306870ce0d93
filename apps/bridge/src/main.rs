mod bridge;
mod config;
mod errors;
mod form;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::bridge::{FormBridge, Settled};
use crate::config::Config;
use crate::form::fields::read_field_file;
use crate::form::{prompt, FormFields, StdoutSink};

#[derive(Parser)]
#[command(name = "bridge")]
#[command(about = "Send a resume to the cover-letter and resizing backend")]
struct Cli {
    /// Backend origin, overriding BRIDGE_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Prompt for every field, then request both a cover letter and resizing guidance
    Interactive,
    /// Generate a cover letter from a resume and a job description
    CoverLetter {
        /// Resume file (.pdf or plain text)
        #[arg(long)]
        resume: PathBuf,
        /// Job description file (.pdf or plain text)
        #[arg(long)]
        job_description: PathBuf,
    },
    /// Get guidance on fitting a resume to a target page length
    Resize {
        /// Resume file (.pdf or plain text)
        #[arg(long)]
        resume: PathBuf,
        /// Target page length, forwarded as typed
        #[arg(long)]
        page_length: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }

    // Logs go to stderr; stdout only carries displayed text.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting bridge v{}", env!("CARGO_PKG_VERSION"));
    info!("Backend: {}", config.base_url);

    let bridge = FormBridge::new(&config.base_url).context("Failed to build HTTP client")?;
    let output = StdoutSink;

    let settled = match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let form = {
                let stdin = std::io::stdin();
                let mut input = stdin.lock();
                let mut out = std::io::stdout();
                prompt::collect_form(&mut input, &mut out)?
            };

            println!("\n--- Generating Cover Letter ---");
            let cover = bridge.submit_cover_letter_request(&form, &output).await;

            println!("\n--- Resume Resizing Guidance ---");
            let resize = bridge.submit_resume_resize_request(&form, &output).await;

            if cover == Settled::Failed {
                cover
            } else {
                resize
            }
        }
        Command::CoverLetter {
            resume,
            job_description,
        } => {
            let form = FormFields::new()
                .with_resume(read_field_file(&resume)?)
                .with_job_description(read_field_file(&job_description)?);
            bridge.submit_cover_letter_request(&form, &output).await
        }
        Command::Resize {
            resume,
            page_length,
        } => {
            let form = FormFields::new()
                .with_resume(read_field_file(&resume)?)
                .with_page_length(page_length);
            bridge.submit_resume_resize_request(&form, &output).await
        }
    };

    Ok(match settled {
        Settled::Displayed => ExitCode::SUCCESS,
        Settled::Failed => ExitCode::FAILURE,
    })
}
