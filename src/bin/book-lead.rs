//! Submit a booking request from the terminal, through the same controller
//! the booking form uses.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crystal_clear::config::AppConfig;
use crystal_clear::models::{Field, SiteContent, SubmissionOutcome};
use crystal_clear::services::contact::http::HttpContactTransport;
use crystal_clear::LeadSubmissionController;

#[derive(Parser)]
#[command(name = "book-lead")]
#[command(about = "Send a booking request to the Crystal Clear contact endpoint")]
struct Cli {
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    phone: String,

    /// Package option value; `--list-packages` prints them
    #[arg(long, default_value = "")]
    package: String,

    #[arg(long, default_value = "")]
    message: String,

    /// Site origin (defaults to CONTACT_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long)]
    list_packages: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    if cli.list_packages {
        for option in SiteContent::crystal_clear().package_options() {
            println!("{:<45} {}", option.value, option.label);
        }
        return Ok(());
    }

    let base_url = cli
        .base_url
        .unwrap_or_else(|| AppConfig::from_env().contact_base_url);
    let transport = HttpContactTransport::new(&base_url);
    tracing::info!(url = transport.url(), "submitting booking request");

    let controller = LeadSubmissionController::new(Arc::new(transport));
    controller.update_field(Field::Name, cli.name);
    controller.update_field(Field::Phone, cli.phone);
    controller.update_field(Field::Package, cli.package);
    controller.update_field(Field::Message, cli.message);

    match controller.submit().await {
        Ok(outcome) => {
            println!("{}", outcome.banner().unwrap_or(outcome.as_str()));
            controller.shutdown();
            anyhow::ensure!(
                outcome == SubmissionOutcome::Success,
                "submission failed"
            );
        }
        Err(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field.as_str(), message);
            }
            anyhow::bail!("booking request has {} invalid field(s)", errors.len());
        }
    }

    Ok(())
}
