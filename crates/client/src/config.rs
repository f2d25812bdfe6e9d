//! Simulation configuration read from the environment.

use std::env;
use std::path::PathBuf;

/// Settings for one headless run.
///
/// Call `dotenvy::dotenv()` before [`SimConfig::from_env`] to pick up a
/// local `.env` file.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// TOML guard configuration. Bundled content when unset.
    pub guard_config: Option<PathBuf>,
    /// RON patrol route. Bundled content when unset.
    pub route_file: Option<PathBuf>,
    /// Seconds per simulated tick.
    pub tick_seconds: f32,
    pub ticks: u32,
    /// Print events to stdout as JSON lines instead of logging them.
    pub events_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            guard_config: None,
            route_file: None,
            tick_seconds: 0.1,
            ticks: 600,
            events_json: false,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.guard_config = env::var("STEALTH_GUARD_CONFIG").ok().map(PathBuf::from);
        config.route_file = env::var("STEALTH_ROUTE_FILE").ok().map(PathBuf::from);

        if let Some(seconds) = read_env::<f32>("SIM_TICK_SECONDS")
            && seconds.is_finite()
            && seconds > 0.0
        {
            config.tick_seconds = seconds;
        }
        if let Some(ticks) = read_env::<u32>("SIM_TICKS") {
            config.ticks = ticks;
        }

        if let Some(enable) = read_env_bool("SIM_EVENTS_JSON") {
            config.events_json = enable;
        } else if env::var("SIM_EVENTS_JSON").is_ok_and(|value| value.is_empty()) {
            // Also accept just setting the variable without value as "true"
            config.events_json = true;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = SimConfig::default();
        assert!(config.tick_seconds > 0.0);
        assert!(config.ticks > 0);
        assert!(config.guard_config.is_none());
    }

    #[test]
    fn bool_flags_accept_common_spellings() {
        for off in ["0", "false", "No", "OFF"] {
            assert_eq!(parse_bool(off), Some(false), "{off}");
        }
        for on in ["1", "true", "Yes", "on"] {
            assert_eq!(parse_bool(on), Some(true), "{on}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }
}
