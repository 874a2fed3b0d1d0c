//! Output structures for the radial view

use serde::{Deserialize, Serialize};
use crate::types::{Contact, Ring};

/// A contact placed on its ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingNode {
    pub contact: Contact,
    pub ring: Ring,
    pub x: f64,
    pub y: f64,
}

impl RingNode {
    /// Distance from a point (usually the canvas center)
    pub fn distance_from(&self, cx: f64, cy: f64) -> f64 {
        (self.x - cx).hypot(self.y - cy)
    }

    /// Angle around a point in radians, -π/2 at the top
    pub fn angle_from(&self, cx: f64, cy: f64) -> f64 {
        (self.y - cy).atan2(self.x - cx)
    }

    /// Parseable one-line form (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "ring={} | x={:.1} | y={:.1} | {} | {}",
            self.ring.number(),
            self.x,
            self.y,
            self.contact.initials(),
            self.contact.name
        )
    }
}
