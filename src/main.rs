//! Palette sheets binary entrypoint: renders `<name>.png` and `<name>_ext.png`.

use std::process::ExitCode;

use anyhow::Context;
use palette_sheets::{config::RenderConfig, generator};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let chain = format!("{err:#}");
            error!(error = %chain, "can't generate the palette");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    info!("palette generation in progress");
    let config = RenderConfig::load();
    let sheets = generator::generate(&config)
        .with_context(|| format!("rendering palette `{}`", config.input.display()))?;
    info!(
        compact = %sheets.compact.display(),
        extended = %sheets.extended.display(),
        "palette sheets written"
    );
    Ok(())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
