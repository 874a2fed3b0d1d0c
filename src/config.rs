//! Configuration for the warmth model
//!
//! Every value has a default matching the shipped product, so an empty
//! JSON object (`{}`) is a valid configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Ring;
use crate::{CANVAS_SIZE, LOCAL_LOCATIONS, NODE_RADIUS, OUTREACH_SIZE, RING_RADII};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("ring radii must be positive and strictly increasing, got {0:?}")]
    RadiiNotIncreasing([f64; 4]),
    #[error("node radius must be positive, got {0}")]
    InvalidNodeRadius(f64),
    #[error("canvas size must be positive, got {0}")]
    InvalidCanvasSize(f64),
    #[error("local location #{0} is blank")]
    BlankLocalLocation(usize),
}

/// Depth assumed when a contact has none recorded.
///
/// Each consumer declares its own default: badges assume an average
/// relationship, while the risk filter and outreach bonus only count
/// explicitly close contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthDefaults {
    /// Used by nudge badges
    pub badge: i32,
    /// Used by the close-friends-at-risk filter
    pub risk: i32,
    /// Used by weekly outreach scoring
    pub outreach: i32,
}

impl Default for DepthDefaults {
    fn default() -> Self {
        Self { badge: 3, risk: 0, outreach: 0 }
    }
}

/// What to do with contacts that do not fit on their ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep the first contacts that fit without overlap, drop the rest
    #[default]
    Truncate,
    /// Place every contact, even if nodes touch
    ShowAll,
}

/// Radial view geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Square canvas edge; the center sits at half of it
    pub canvas_size: f64,
    /// Radius per ring, innermost first
    pub ring_radii: [f64; 4],
    /// Visual radius of one contact node
    pub node_radius: f64,
    pub overflow: OverflowPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            ring_radii: RING_RADII,
            node_radius: NODE_RADIUS,
            overflow: OverflowPolicy::default(),
        }
    }
}

impl LayoutConfig {
    /// Canvas center (x, y)
    pub fn center(&self) -> (f64, f64) {
        let c = self.canvas_size / 2.0;
        (c, c)
    }

    pub fn radius(&self, ring: Ring) -> f64 {
        self.ring_radii[ring.index()]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_size.is_nan() || self.canvas_size <= 0.0 {
            return Err(ConfigError::InvalidCanvasSize(self.canvas_size));
        }
        if self.node_radius.is_nan() || self.node_radius <= 0.0 {
            return Err(ConfigError::InvalidNodeRadius(self.node_radius));
        }
        let increasing = self.ring_radii[0] > 0.0
            && self.ring_radii.windows(2).all(|w| w[0] < w[1]);
        if !increasing {
            return Err(ConfigError::RadiiNotIncreasing(self.ring_radii));
        }
        Ok(())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarmthConfig {
    /// Location substrings that count as local
    pub local_locations: Vec<String>,
    /// Weekly outreach shortlist size
    pub outreach_size: usize,
    pub depth_defaults: DepthDefaults,
    pub layout: LayoutConfig,
}

impl Default for WarmthConfig {
    fn default() -> Self {
        Self {
            local_locations: LOCAL_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            outreach_size: OUTREACH_SIZE,
            depth_defaults: DepthDefaults::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl WarmthConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: WarmthConfig = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// A blank local name would match every location
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(i) = self.local_locations.iter().position(|loc| loc.trim().is_empty()) {
            return Err(ConfigError::BlankLocalLocation(i));
        }
        self.layout.validate()
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_product() {
        let config = WarmthConfig::default();
        assert_eq!(config.depth_defaults, DepthDefaults { badge: 3, risk: 0, outreach: 0 });
        assert_eq!(config.outreach_size, 5);
        assert_eq!(config.layout.center(), (220.0, 220.0));
        assert_eq!(config.layout.overflow, OverflowPolicy::Truncate);
        assert_eq!(config.local_locations.len(), 9);
        assert!(config.layout.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: WarmthConfig =
            serde_json::from_str(r#"{"outreach_size": 3, "layout": {"overflow": "show_all"}}"#).unwrap();
        assert_eq!(config.outreach_size, 3);
        assert_eq!(config.layout.overflow, OverflowPolicy::ShowAll);
        assert_eq!(config.layout.ring_radii, RING_RADII);
        assert_eq!(config.depth_defaults.badge, 3);
    }

    #[test]
    fn test_rejects_non_increasing_radii() {
        let layout = LayoutConfig {
            ring_radii: [65.0, 120.0, 120.0, 205.0],
            ..LayoutConfig::default()
        };
        assert!(matches!(layout.validate(), Err(ConfigError::RadiiNotIncreasing(_))));
    }

    #[test]
    fn test_rejects_zero_node_radius() {
        let layout = LayoutConfig { node_radius: 0.0, ..LayoutConfig::default() };
        assert!(matches!(layout.validate(), Err(ConfigError::InvalidNodeRadius(_))));
    }

    #[test]
    fn test_rejects_blank_local_location() {
        let config: WarmthConfig =
            serde_json::from_str(r#"{"local_locations": ["Berkeley", "  "]}"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::BlankLocalLocation(1))));
        assert!(WarmthConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = WarmthConfig::load("/nonexistent/warmth.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
