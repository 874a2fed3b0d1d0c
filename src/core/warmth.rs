//! Warmth classifier: recency rings, nudge badges and derived contact lists
//!
//! Rings by days since last interaction:
//! - WEEKLY:    d ≤ 7
//! - MONTHLY:   8 ≤ d ≤ 30
//! - QUARTERLY: 31 ≤ d ≤ 90
//! - DRIFTING:  d ≥ 91, or never contacted
//!
//! Badges, first match wins:
//! - reach out: never contacted
//! - priority:  depth ≥ 4 and d ≥ 14
//! - check in:  long distance and d ≥ 30
//! - nudge:     d ≥ 21

use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::Serialize;

use crate::config::{DepthDefaults, WarmthConfig};
use crate::types::{Contact, NudgeBadge, Recency, Ring};
use crate::{
    AT_RISK_DAYS, CHECK_IN_DAYS, CLOSE_DEPTH, GOING_COLD_DAYS, LOCAL_LOCATIONS,
    NEVER_CONTACTED_DAYS, NUDGE_DAYS, OUTREACH_CLOSE_BONUS, OUTREACH_RECENCY_CAP,
    OUTREACH_STALE_BONUS, PRIORITY_DAYS, RING_MONTHLY_MAX_DAYS, RING_QUARTERLY_MAX_DAYS,
    RING_WEEKLY_MAX_DAYS,
};

lazy_static! {
    static ref DEFAULT_LOCAL_LOWER: Vec<String> =
        LOCAL_LOCATIONS.iter().map(|loc| loc.to_lowercase()).collect();
}

/// Ring for a last-interaction date as of `today`
pub fn classify_ring(today: NaiveDate, last_interaction_date: Option<NaiveDate>) -> Ring {
    match Recency::from_date(today, last_interaction_date) {
        Recency::Never => Ring::Drifting,
        Recency::DaysAgo(d) if d <= RING_WEEKLY_MAX_DAYS => Ring::Weekly,
        Recency::DaysAgo(d) if d <= RING_MONTHLY_MAX_DAYS => Ring::Monthly,
        Recency::DaysAgo(d) if d <= RING_QUARTERLY_MAX_DAYS => Ring::Quarterly,
        Recency::DaysAgo(_) => Ring::Drifting,
    }
}

/// Weekly outreach score.
///
/// `Never` counts as 999 days, so it always takes the full recency
/// component and the staleness bonus.
pub fn outreach_score(recency: Recency, depth: i32) -> i64 {
    let days = match recency {
        Recency::Never => NEVER_CONTACTED_DAYS,
        Recency::DaysAgo(d) => d,
    };
    let mut score = days.min(OUTREACH_RECENCY_CAP);
    if depth >= CLOSE_DEPTH {
        score += OUTREACH_CLOSE_BONUS;
    }
    if days >= NUDGE_DAYS {
        score += OUTREACH_STALE_BONUS;
    }
    score
}

/// Reference list of local location names, matched case-insensitively
#[derive(Debug, Clone, PartialEq)]
pub struct LocalLocations {
    lowered: Vec<String>,
}

impl Default for LocalLocations {
    fn default() -> Self {
        Self { lowered: DEFAULT_LOCAL_LOWER.clone() }
    }
}

impl LocalLocations {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lowered: names.into_iter().map(|n| n.as_ref().to_lowercase()).collect(),
        }
    }

    /// True if `location` contains any reference name
    pub fn matches(&self, location: &str) -> bool {
        let location = location.to_lowercase();
        self.lowered.iter().any(|loc| location.contains(loc.as_str()))
    }

    /// `Some(true)` local, `Some(false)` long distance, `None` no location
    pub fn is_local(&self, contact: &Contact) -> Option<bool> {
        contact.location.as_deref().map(|loc| self.matches(loc))
    }
}

/// A contact with its weekly outreach score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredContact<'a> {
    pub contact: &'a Contact,
    pub score: i64,
}

/// Warmth classifier over contact collections
#[derive(Debug, Clone, Default)]
pub struct WarmthClassifier {
    local: LocalLocations,
    depth: DepthDefaults,
}

impl WarmthClassifier {
    /// Create classifier with the default local list and depth defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(local: LocalLocations, depth: DepthDefaults) -> Self {
        Self { local, depth }
    }

    pub fn from_config(config: &WarmthConfig) -> Self {
        Self::with_parts(LocalLocations::new(&config.local_locations), config.depth_defaults)
    }

    pub fn local_locations(&self) -> &LocalLocations {
        &self.local
    }

    pub fn depth_defaults(&self) -> DepthDefaults {
        self.depth
    }

    /// Ring for a contact
    pub fn ring(&self, contact: &Contact, today: NaiveDate) -> Ring {
        classify_ring(today, contact.last_interaction_date)
    }

    /// Best-fit nudge badge for a contact, if any
    pub fn nudge_badge(&self, contact: &Contact, today: NaiveDate) -> Option<NudgeBadge> {
        let days = match Recency::of(contact, today) {
            Recency::Never => return Some(NudgeBadge::ReachOut),
            Recency::DaysAgo(d) => d,
        };
        let depth = contact.depth_or(self.depth.badge);
        let long_distance = self.local.is_local(contact) == Some(false);

        if depth >= CLOSE_DEPTH && days >= PRIORITY_DAYS {
            Some(NudgeBadge::Priority)
        } else if long_distance && days >= CHECK_IN_DAYS {
            Some(NudgeBadge::CheckIn)
        } else if days >= NUDGE_DAYS {
            Some(NudgeBadge::Nudge)
        } else {
            None
        }
    }

    /// Never contacted, or not for 30 days
    pub fn going_cold<'a>(&self, contacts: &'a [Contact], today: NaiveDate) -> Vec<&'a Contact> {
        contacts
            .iter()
            .filter(|c| Recency::of(c, today).at_least(GOING_COLD_DAYS))
            .collect()
    }

    /// Close contacts (explicit depth ≥ 4) not reached for 14 days or ever
    pub fn close_friends_at_risk<'a>(&self, contacts: &'a [Contact], today: NaiveDate) -> Vec<&'a Contact> {
        contacts
            .iter()
            .filter(|c| c.depth_or(self.depth.risk) >= CLOSE_DEPTH)
            .filter(|c| Recency::of(c, today).at_least(AT_RISK_DAYS))
            .collect()
    }

    /// Contacts whose location matches the local list
    pub fn local_contacts<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        contacts
            .iter()
            .filter(|c| self.local.is_local(c) == Some(true))
            .collect()
    }

    /// Contacts with a location outside the local list
    pub fn long_distance_contacts<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        contacts
            .iter()
            .filter(|c| self.local.is_local(c) == Some(false))
            .collect()
    }

    /// Score for one contact
    pub fn score(&self, contact: &Contact, today: NaiveDate) -> i64 {
        outreach_score(Recency::of(contact, today), contact.depth_or(self.depth.outreach))
    }

    /// Top `k` contacts by outreach score; equal scores keep input order
    pub fn weekly_outreach<'a>(
        &self,
        contacts: &'a [Contact],
        today: NaiveDate,
        k: usize,
    ) -> Vec<ScoredContact<'a>> {
        let mut scored: Vec<ScoredContact<'a>> = contacts
            .iter()
            .map(|contact| ScoredContact { contact, score: self.score(contact, today) })
            .collect();
        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(k);
        scored
    }

    /// Group contacts by ring, input order kept within each ring
    pub fn partition<'a>(&self, contacts: &'a [Contact], today: NaiveDate) -> [Vec<&'a Contact>; 4] {
        partition_by_ring(contacts, today)
    }
}

/// Group contacts by ring, input order kept within each ring
pub fn partition_by_ring(contacts: &[Contact], today: NaiveDate) -> [Vec<&Contact>; 4] {
    let mut groups: [Vec<&Contact>; 4] = Default::default();
    for contact in contacts {
        groups[classify_ring(today, contact.last_interaction_date).index()].push(contact);
    }
    groups
}

// =============================================================================
// TESTS
// =============================================================================
