//! Headless guard simulation.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ SimConfig (environment)
//!   ├─→ stealth-content (guard config + patrol route)
//!   ├─→ Arena (walls, scripted intruder, visibility query)
//!   └─→ GuardController (one tick per simulated frame)
//! ```
//!
//! The simulation owns the clock: it advances the arena, ticks the guard
//! and forwards every [`GuardEvent`] either to the log or to stdout as JSON
//! lines.

pub mod arena;
pub mod config;

pub use arena::{Arena, Intruder, Wall};
pub use config::SimConfig;

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use stealth_content::{ConfigLoader, ContentFactory, RouteLoader};
use stealth_core::{Body, GuardConfig, GuardState, PatrolRoute};
use stealth_runtime::{GuardController, GuardEvent};

/// Route used when no route file is configured.
pub const DEFAULT_ROUTE: &str = "courtyard";

/// One event line in JSON output.
#[derive(Debug, Serialize)]
pub struct EventRecord<'a> {
    pub tick: u32,
    pub time: f32,
    pub event: &'a GuardEvent,
}

/// Totals for a finished run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimSummary {
    pub ticks: u32,
    pub events: usize,
    pub final_state: GuardState,
    pub alerted_at: Option<u32>,
}

/// Loads the configured content, falling back to the bundled data.
pub fn load_content(config: &SimConfig) -> Result<(GuardConfig, PatrolRoute)> {
    let factory = ContentFactory::bundled();

    let guard_config = match &config.guard_config {
        Some(path) => ConfigLoader::load(path),
        None => factory.load_config(),
    }
    .context("loading guard configuration")?;

    let route = match &config.route_file {
        Some(path) => RouteLoader::load(path),
        None => factory.load_route(DEFAULT_ROUTE),
    }
    .context("loading patrol route")?;

    Ok((guard_config, route))
}

/// Runs the guard against `arena` for `config.ticks` ticks.
///
/// Events are logged, or written to `out` as JSON lines when
/// `config.events_json` is set. Stops early once the guard reaches a
/// terminal state.
pub fn run<W: Write>(
    config: &SimConfig,
    guard_config: GuardConfig,
    route: PatrolRoute,
    arena: &mut Arena,
    out: &mut W,
) -> Result<SimSummary> {
    let start = route
        .get(0)
        .map(|waypoint| waypoint.position)
        .unwrap_or_default();
    let mut guard = GuardController::new(guard_config, route, Body::new(start, 0.0))?;
    let mut summary = SimSummary::default();

    for tick in 0..config.ticks {
        arena.advance(config.tick_seconds);
        let report = guard.tick(config.tick_seconds, &*arena);
        let time = (tick + 1) as f32 * config.tick_seconds;

        for event in guard.drain_events() {
            summary.events += 1;
            if config.events_json {
                let record = EventRecord {
                    tick,
                    time,
                    event: &event,
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            } else {
                tracing::info!("[t={:.2}s] {:?}", time, event);
            }
            if matches!(event, GuardEvent::AlertRaised { .. }) {
                summary.alerted_at = Some(tick);
            }
        }

        summary.ticks = tick + 1;
        summary.final_state = report.state;
        if report.state.is_terminal() {
            break;
        }
    }

    tracing::info!(
        "Simulation finished after {} ticks in state {} ({} events)",
        summary.ticks,
        summary.final_state,
        summary.events
    );
    Ok(summary)
}
