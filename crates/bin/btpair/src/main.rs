//! # btpair — pairing page console
//!
//! Composition root that wires the HTTP backend and the console renderer
//! into the page controller, then lets the user pick and connect a device.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` logging
//! - Construct the backend adapter and the renderer
//! - Load the page, run one interactive selection, submit
//!
//! ## Dependency rule
//! Only this crate sees every other crate. It wires them together and holds
//! no page logic of its own.

mod config;
mod console;
mod session;

use btpair_adapter_http_reqwest::HttpBackend;
use btpair_app::services::page_controller::{PageController, SubmitOutcome};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::console::ConsoleRenderer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let backend = HttpBackend::new(&config.backend)?;
    tracing::info!(backend = %backend.base_url(), "loading pairing page");

    let controller = PageController::new(backend, ConsoleRenderer::new(std::io::stdout()));
    let report = controller.load().await;
    if !report.is_complete() {
        tracing::debug!(?report, "page loaded with failed fetches");
    }

    let mut input = BufReader::new(tokio::io::stdin());
    let mut prompts = std::io::stdout();
    match session::run(&controller, &mut input, &mut prompts).await? {
        Some(SubmitOutcome::Completed) => tracing::info!("connect request answered"),
        Some(SubmitOutcome::Failed(err)) => {
            tracing::warn!(error = %err, "connect request failed");
        }
        Some(SubmitOutcome::Skipped) | None => {}
    }

    Ok(())
}
