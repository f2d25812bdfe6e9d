//! Stealth guard simulation binary.
//!
//! Runs one guard against the scripted courtyard arena and reports what it
//! does.
//!
//! # Examples
//!
//! ```bash
//! # Default bundled content, events in the log
//! RUST_LOG=info cargo run -p stealth-sim
//!
//! # Custom route, JSON event stream on stdout
//! STEALTH_ROUTE_FILE=routes/gate.ron SIM_EVENTS_JSON=1 cargo run -p stealth-sim
//! ```

use anyhow::Result;
use stealth_sim::{Arena, SimConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    tracing::info!("Starting guard simulation");
    tracing::info!("Ticks: {} x {:.3}s", config.ticks, config.tick_seconds);

    let (guard_config, route) = stealth_sim::load_content(&config)?;
    let mut arena = Arena::courtyard();

    let stdout = std::io::stdout();
    let summary = stealth_sim::run(&config, guard_config, route, &mut arena, &mut stdout.lock())?;

    if let Some(tick) = summary.alerted_at {
        tracing::info!("Guard raised the alert on tick {}", tick);
    }
    Ok(())
}
