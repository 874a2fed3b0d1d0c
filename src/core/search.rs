//! People search over name, tags and location

use crate::types::Contact;

/// True if the query appears (case-insensitive) in the name, a tag or the location.
/// The query is matched as typed, so an empty query matches everyone.
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    let query = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&query);

    hit(contact.name.as_str())
        || contact.tags.iter().any(|tag| hit(tag.as_str()))
        || contact.location.as_deref().is_some_and(hit)
}

/// Contacts matching the query, in input order
pub fn search<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    contacts.iter().filter(|c| matches_query(c, query)).collect()
}
