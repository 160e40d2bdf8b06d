//! # smarttech — console control station
//!
//! Composition root that wires configuration, logging, the device registry
//! and the console session together.

use smarttech_app::services::control_service::ControlService;
use smarttech_console::config::Config;
use smarttech_console::render::Painter;
use smarttech_console::session::Session;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    // Logs go to stderr so the menu on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let registry = config.build_registry().inspect_err(|err| {
        tracing::error!(error = %err, "failed to build device registry");
    })?;
    tracing::info!(devices = registry.len(), "device registry ready");

    let service = ControlService::new(registry);
    let painter = Painter::new(config.display.color);
    let mut session = Session::new(
        service,
        painter,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
    );
    session.run()?;

    Ok(())
}
