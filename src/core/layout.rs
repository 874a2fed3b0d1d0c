//! Ring layout engine: places contacts around concentric rings
//!
//! The i-th of n contacts on a ring sits at angle 2πi/n − π/2, so the
//! first contact is at 12 o'clock and the rest follow clockwise (y grows
//! downward on the canvas). A ring of radius r holds at most
//! ⌊π / asin(ρ/r)⌋ nodes of radius ρ before adjacent nodes overlap.

use std::f64::consts::{FRAC_PI_2, PI};

use chrono::NaiveDate;

use crate::config::{LayoutConfig, OverflowPolicy};
use crate::core::warmth::partition_by_ring;
use crate::types::{Contact, Ring, RingNode};

/// Nodes of radius `node_radius` that fit on a ring of `ring_radius`
/// with adjacent chords of at least 2·`node_radius`
pub fn max_nodes_for_ring(ring_radius: f64, node_radius: f64) -> usize {
    // A node wider than its ring still fits two, at opposite sides
    let ratio = (node_radius / ring_radius).min(1.0);
    (PI / ratio.asin()).floor() as usize
}

/// Position of the i-th of n nodes on a circle of radius r around (cx, cy),
/// `None` for an empty ring
pub fn ring_position(i: usize, n: usize, r: f64, cx: f64, cy: f64) -> Option<(f64, f64)> {
    if n == 0 {
        return None;
    }
    let angle = 2.0 * PI * i as f64 / n as f64 - FRAC_PI_2;
    Some((cx + r * angle.cos(), cy + r * angle.sin()))
}

/// Radial layout engine
#[derive(Debug, Clone, Default)]
pub struct RingLayoutEngine {
    config: LayoutConfig,
}

impl RingLayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn ring_radius(&self, ring: Ring) -> f64 {
        self.config.radius(ring)
    }

    /// Node limit for a ring, `None` when every contact is shown
    pub fn ring_capacity(&self, ring: Ring) -> Option<usize> {
        match self.config.overflow {
            OverflowPolicy::Truncate => {
                Some(max_nodes_for_ring(self.ring_radius(ring), self.config.node_radius))
            }
            OverflowPolicy::ShowAll => None,
        }
    }

    /// Node positions for every visible contact, ring by ring
    pub fn layout(&self, contacts: &[Contact], today: NaiveDate) -> Vec<RingNode> {
        let (cx, cy) = self.config.center();
        let groups = partition_by_ring(contacts, today);
        let mut nodes = Vec::with_capacity(contacts.len());

        for ring in Ring::ALL {
            let members = &groups[ring.index()];
            let visible = self.visible_count(ring, members.len());
            if visible == 0 {
                continue;
            }
            if visible < members.len() {
                tracing::debug!(
                    ring = %ring,
                    shown = visible,
                    hidden = members.len() - visible,
                    "ring overflow, dropping contacts from radial view"
                );
            }

            let r = self.ring_radius(ring);
            for (i, contact) in members.iter().take(visible).enumerate() {
                let Some((x, y)) = ring_position(i, visible, r, cx, cy) else {
                    continue;
                };
                nodes.push(RingNode {
                    contact: (*contact).clone(),
                    ring,
                    x,
                    y,
                });
            }
        }
        nodes
    }

    /// Contacts per ring left out of the radial view
    pub fn hidden_counts(&self, contacts: &[Contact], today: NaiveDate) -> [usize; 4] {
        let groups = partition_by_ring(contacts, today);
        let mut hidden = [0usize; 4];
        for ring in Ring::ALL {
            let total = groups[ring.index()].len();
            hidden[ring.index()] = total - self.visible_count(ring, total);
        }
        hidden
    }

    fn visible_count(&self, ring: Ring, members: usize) -> usize {
        match self.ring_capacity(ring) {
            Some(cap) => members.min(cap),
            None => members,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
