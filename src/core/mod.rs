//! Core modules for Warmth

pub mod warmth;
pub mod layout;
pub mod dashboard;
pub mod search;
pub mod store;

pub use warmth::{
    classify_ring, outreach_score, partition_by_ring, LocalLocations, ScoredContact,
    WarmthClassifier,
};
pub use layout::{max_nodes_for_ring, ring_position, RingLayoutEngine};
pub use dashboard::{section_preview, summarize_contact, ContactSummary, Dashboard, RingCounts};
pub use search::{matches_query, search};
pub use store::{demo_contacts, is_demo_contact, load_contacts, parse_contacts, LoadError};
