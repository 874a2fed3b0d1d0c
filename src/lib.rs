//! Warmth: relationship warmth model
//!
//! Classifies contacts into recency rings, derives nudges and the weekly
//! outreach shortlist, and lays contacts out on concentric rings.
//! Every computation takes "today" explicitly and performs no I/O.

pub mod config;
pub mod core;
pub mod types;

// =============================================================================
// RING THRESHOLDS [days since last interaction, inclusive upper bound]
// =============================================================================

/// Last day that still counts as a weekly contact
pub const RING_WEEKLY_MAX_DAYS: i64 = 7;

/// Last day that still counts as a monthly contact
pub const RING_MONTHLY_MAX_DAYS: i64 = 30;

/// Last day that still counts as a quarterly contact
pub const RING_QUARTERLY_MAX_DAYS: i64 = 90;

// =============================================================================
// NUDGE THRESHOLDS
// =============================================================================

/// Depth at which a relationship counts as close
pub const CLOSE_DEPTH: i32 = 4;

/// Close relationship going stale
pub const PRIORITY_DAYS: i64 = 14;

/// Long-distance drift
pub const CHECK_IN_DAYS: i64 = 30;

/// General staleness
pub const NUDGE_DAYS: i64 = 21;

/// A contact is going cold after this many days
pub const GOING_COLD_DAYS: i64 = 30;

/// Close friends are at risk after this many days
pub const AT_RISK_DAYS: i64 = 14;

// =============================================================================
// WEEKLY OUTREACH SCORING
// =============================================================================

/// Day count used for a contact that was never reached
pub const NEVER_CONTACTED_DAYS: i64 = 999;

/// Cap on the recency component of the score
pub const OUTREACH_RECENCY_CAP: i64 = 90;

/// Bonus for close relationships
pub const OUTREACH_CLOSE_BONUS: i64 = 30;

/// Bonus once a contact passes the nudge threshold
pub const OUTREACH_STALE_BONUS: i64 = 20;

/// Default shortlist size
pub const OUTREACH_SIZE: usize = 5;

/// Cards shown per dashboard section; the heading still counts everyone
pub const SECTION_PREVIEW_SIZE: usize = 5;

// =============================================================================
// CANVAS [C] - radial view geometry
// =============================================================================

/// Square canvas edge
pub const CANVAS_SIZE: f64 = 440.0;

/// Ring radii, innermost (weekly) first
pub const RING_RADII: [f64; 4] = [65.0, 120.0, 168.0, 205.0];

/// Visual radius of a contact node
pub const NODE_RADIUS: f64 = 18.0;

// =============================================================================
// LOCAL LOCATIONS
// =============================================================================

/// Location substrings that count as local (case-insensitive)
pub const LOCAL_LOCATIONS: [&str; 9] = [
    "Berkeley",
    "San Francisco",
    "Oakland",
    "Palo Alto",
    "San Jose",
    "Mountain View",
    "Sunnyvale",
    "Fremont",
    "Walnut Creek",
];

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
