//! Contact sources: demo contacts and JSON files
//!
//! The warmth core never queries storage itself; callers hand it a slice
//! of contacts. This module is the thin edge the CLI uses to get one.

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::Contact;

/// Prefix of seeded demo contact ids
pub const DEMO_ID_PREFIX: &str = "default_";

/// Contact loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read contacts {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse contacts {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a JSON array of contacts
pub fn load_contacts(path: impl AsRef<Path>) -> Result<Vec<Contact>, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let contacts = parse_contacts(&json).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = contacts.len(), "loaded contacts");
    Ok(contacts)
}

/// Parse a JSON array of contacts
pub fn parse_contacts(json: &str) -> Result<Vec<Contact>, serde_json::Error> {
    serde_json::from_str(json)
}

/// True for ids of seeded demo contacts
pub fn is_demo_contact(id: &str) -> bool {
    id.starts_with(DEMO_ID_PREFIX)
}

fn demo(
    slug: &str,
    name: &str,
    location: &str,
    depth: i32,
    tags: &[&str],
    (y, m, d): (i32, u32, u32),
) -> Contact {
    let mut contact = Contact::new(format!("{}{}", DEMO_ID_PREFIX, slug), name)
        .with_location(location)
        .with_depth(depth)
        .with_tags(tags.iter().copied());
    contact.last_interaction_date = NaiveDate::from_ymd_opt(y, m, d);
    contact
}

/// Contacts shown to a new user before they add their own
pub fn demo_contacts() -> Vec<Contact> {
    vec![
        demo("priya", "Priya Nair", "Berkeley", 5, &["Section A", "Close Friend", "Study Group"], (2026, 2, 5)),
        demo("marcus", "Marcus Chen", "San Francisco", 4, &["Tech Club", "Bay Area"], (2026, 1, 22)),
        demo("sophie", "Sophie Laurent", "New York", 3, &["Finance Club", "Recruiting"], (2026, 1, 10)),
        demo("tomas", "Tomas Reyes", "Berkeley", 3, &["Section B", "Entrepreneurship"], (2026, 2, 10)),
        demo("aisha", "Aisha Okonkwo", "Oakland", 4, &["Consortium", "Close Friend"], (2026, 1, 28)),
        demo("james", "James Whitfield", "Palo Alto", 2, &["Mentor", "Bay Area"], (2025, 12, 15)),
        demo("elena", "Elena Vasquez", "Chicago", 3, &["Home"], (2026, 1, 5)),
        demo("kai", "Kai Nakamura", "Mountain View", 4, &["Tech Club", "Section C"], (2026, 2, 1)),
        demo("zara", "Zara Ahmed", "Berkeley", 5, &["Section A", "Close Friend", "International"], (2026, 2, 7)),
    ]
}
