//! Contact model as consumed by the warmth core
//!
//! A contact is an immutable snapshot supplied by the caller's store.
//! Optional fields are read leniently: a malformed date is treated as
//! "never contacted" rather than rejected.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

lazy_static! {
    // Calendar date, alone or leading a timestamp
    // ("2026-02-05", "2026-02-05T10:00:00Z", "2026-02-05 10:00:00+00")
    static ref RE_ISO_DATE: Regex = Regex::new(
        r"^\s*(\d{4})-(\d{2})-(\d{2})(?:\s*$|[T ]\d)"
    ).unwrap();
}

/// A single contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Opaque identifier, unique within a collection
    pub id: String,
    /// Display name
    pub name: String,
    /// Day of the most recent interaction, if any
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub last_interaction_date: Option<NaiveDate>,
    /// Closeness, conventionally 1-5
    #[serde(default)]
    pub relationship_depth: Option<i32>,
    /// Free-text location
    #[serde(default)]
    pub location: Option<String>,
    /// Free-text labels, order preserved
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub tags: Vec<String>,
}

impl Contact {
    /// Create a contact with only id and name set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_interaction_date: None,
            relationship_depth: None,
            location: None,
            tags: Vec::new(),
        }
    }

    pub fn with_last_interaction(mut self, date: NaiveDate) -> Self {
        self.last_interaction_date = Some(date);
        self
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.relationship_depth = Some(depth);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Relationship depth, falling back to the caller's default
    pub fn depth_or(&self, default: i32) -> i32 {
        self.relationship_depth.unwrap_or(default)
    }

    /// Up to two upper-cased initials ("Priya Nair" -> "PN")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Card text describing the last contact
    pub fn last_contact_text(&self, today: NaiveDate) -> String {
        match Recency::of(self, today) {
            Recency::Never => "No interactions recorded yet".to_string(),
            Recency::DaysAgo(days) => format!(
                "Last contact: {} day{} ago",
                days,
                if days == 1 { "" } else { "s" }
            ),
        }
    }
}

/// How long ago a contact was last reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum Recency {
    /// No interaction recorded
    Never,
    /// Whole calendar days since the last interaction
    DaysAgo(i64),
}

impl Recency {
    /// Recency of a contact as of `today`
    pub fn of(contact: &Contact, today: NaiveDate) -> Self {
        Self::from_date(today, contact.last_interaction_date)
    }

    pub fn from_date(today: NaiveDate, date: Option<NaiveDate>) -> Self {
        match date {
            Some(date) => Recency::DaysAgo(days_since(today, date)),
            None => Recency::Never,
        }
    }

    /// Days, if an interaction was recorded
    pub fn days(&self) -> Option<i64> {
        match self {
            Recency::Never => None,
            Recency::DaysAgo(days) => Some(*days),
        }
    }

    /// True when never contacted or at least `threshold` days ago
    pub fn at_least(&self, threshold: i64) -> bool {
        match self {
            Recency::Never => true,
            Recency::DaysAgo(days) => *days >= threshold,
        }
    }
}

/// Whole calendar days from `date` to `today` (negative for future dates)
pub fn days_since(today: NaiveDate, date: NaiveDate) -> i64 {
    today.signed_duration_since(date).num_days()
}

/// Parse a `YYYY-MM-DD` date, optionally followed by a time; anything else is `None`
pub fn parse_lenient_date(raw: &str) -> Option<NaiveDate> {
    let caps = RE_ISO_DATE.captures(raw)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_lenient_date))
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_days_since_uses_calendar_days() {
        assert_eq!(days_since(date("2026-02-26"), date("2026-02-19")), 7);
        assert_eq!(days_since(date("2026-02-26"), date("2025-11-27")), 91);
        assert_eq!(days_since(date("2026-02-26"), date("2026-02-28")), -2);
    }

    #[test]
    fn test_parse_lenient_date() {
        assert_eq!(parse_lenient_date("2026-02-05"), Some(date("2026-02-05")));
        assert_eq!(parse_lenient_date("2026-02-05T10:00:00Z"), Some(date("2026-02-05")));
        assert_eq!(parse_lenient_date("2026-02-05 10:00:00+00"), Some(date("2026-02-05")));
        assert_eq!(parse_lenient_date("2026-02-30"), None);
        assert_eq!(parse_lenient_date("last tuesday"), None);
        assert_eq!(parse_lenient_date(""), None);
    }

    #[test]
    fn test_parse_lenient_date_rejects_trailing_text() {
        assert_eq!(parse_lenient_date("2026-02-051"), None);
        assert_eq!(parse_lenient_date("2026-02-05 not a date"), None);
        assert_eq!(parse_lenient_date("2026-02-20garbage"), None);
        assert_eq!(parse_lenient_date("2026-02-05T"), None);
    }

    #[test]
    fn test_deserialize_degrades_bad_fields() {
        let json = r#"[
            {"id": "1", "name": "A", "last_interaction_date": "not a date", "tags": null},
            {"id": "2", "name": "B", "last_interaction_date": 20260205},
            {"id": "3", "name": "C", "last_interaction_date": "2026-02-05T08:30:00+00:00",
             "relationship_depth": 4, "location": "Berkeley", "tags": ["Close Friend"]}
        ]"#;
        let contacts: Vec<Contact> = serde_json::from_str(json).unwrap();

        assert_eq!(contacts[0].last_interaction_date, None);
        assert!(contacts[0].tags.is_empty());
        assert_eq!(contacts[1].last_interaction_date, None);
        assert_eq!(contacts[2].last_interaction_date, Some(date("2026-02-05")));
        assert_eq!(contacts[2].relationship_depth, Some(4));
        assert_eq!(contacts[2].tags, vec!["Close Friend".to_string()]);
    }

    #[test]
    fn test_initials() {
        assert_eq!(Contact::new("1", "Priya Nair").initials(), "PN");
        assert_eq!(Contact::new("1", "aisha b okonkwo").initials(), "AB");
        assert_eq!(Contact::new("1", "Kai").initials(), "K");
    }

    #[test]
    fn test_last_contact_text() {
        let today = date("2026-02-26");
        let never = Contact::new("1", "A");
        let yesterday = Contact::new("2", "B").with_last_interaction(date("2026-02-25"));
        let week = Contact::new("3", "C").with_last_interaction(date("2026-02-19"));

        assert_eq!(never.last_contact_text(today), "No interactions recorded yet");
        assert_eq!(yesterday.last_contact_text(today), "Last contact: 1 day ago");
        assert_eq!(week.last_contact_text(today), "Last contact: 7 days ago");
    }

    #[test]
    fn test_recency_at_least() {
        assert!(Recency::Never.at_least(30));
        assert!(Recency::DaysAgo(30).at_least(30));
        assert!(!Recency::DaysAgo(29).at_least(30));
        assert_eq!(Recency::Never.days(), None);
    }
}
