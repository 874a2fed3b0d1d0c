//! Core types for Warmth

mod ring;
mod badge;
mod contact;
mod node;

pub use ring::Ring;
pub use badge::NudgeBadge;
pub use contact::{Contact, Recency, days_since, parse_lenient_date};
pub use node::RingNode;
