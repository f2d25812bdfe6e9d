//! Patrol route loader.

use std::path::Path;

use stealth_core::PatrolRoute;

use crate::loaders::{LoadResult, read_file};

/// Loader for patrol routes from RON files.
///
/// # Format
///
/// ```ron
/// (
///     mode: PingPong,
///     waypoints: [
///         (position: (x: 0.0, y: 0.0), wait_delay: 1.5, trigger_name: "stretch", trigger_value: true),
///         (position: (x: 6.0, y: 0.0), is_observation: true, wait_delay: 3.0),
///     ],
/// )
/// ```
pub struct RouteLoader;

impl RouteLoader {
    /// Load and validate a patrol route from a RON file.
    pub fn load(path: &Path) -> LoadResult<PatrolRoute> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a patrol route from RON text.
    pub fn parse(content: &str) -> LoadResult<PatrolRoute> {
        let route: PatrolRoute = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse patrol route RON: {}", e))?;
        route
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid patrol route: {}", e))?;

        tracing::debug!(
            waypoints = route.len(),
            mode = %route.mode,
            "Loaded patrol route"
        );
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stealth_core::{PatrolMode, Vec2};

    #[test]
    fn parses_waypoints_with_defaults() {
        let route = RouteLoader::parse(
            r#"(
                mode: PingPong,
                waypoints: [
                    (position: (x: 0.0, y: 0.0), trigger_name: "stretch", trigger_value: true),
                    (position: (x: 6.0, y: 2.0), wait_delay: 3.0, is_observation: true),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(route.mode, PatrolMode::PingPong);
        assert_eq!(route.len(), 2);
        assert_eq!(route.waypoints[0].wait_delay, 0.0);
        assert_eq!(route.waypoints[0].trigger_name, "stretch");
        assert_eq!(route.waypoints[1].position, Vec2::new(6.0, 2.0));
        assert!(route.waypoints[1].is_observation);
    }

    #[test]
    fn mode_defaults_to_loop() {
        let route = RouteLoader::parse("(waypoints: [(position: (x: 1.0, y: 1.0))])").unwrap();
        assert_eq!(route.mode, PatrolMode::Loop);
    }

    #[test]
    fn empty_route_is_rejected() {
        let err = RouteLoader::parse("(waypoints: [])").unwrap_err();
        assert!(err.to_string().contains("no waypoints"));
    }

    #[test]
    fn bundled_route_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/routes/courtyard.ron");
        let route = RouteLoader::load(&path).unwrap();
        assert!(route.len() >= 2);
    }
}
