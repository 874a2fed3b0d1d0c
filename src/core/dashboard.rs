//! Dashboard: every derived list for one contact collection

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::WarmthConfig;
use crate::core::warmth::{ScoredContact, WarmthClassifier};
use crate::types::{Contact, NudgeBadge, Ring};
use crate::SECTION_PREVIEW_SIZE;

/// A contact with its ring and badge, as shown on a contact card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSummary<'a> {
    pub contact: &'a Contact,
    pub ring: Ring,
    pub badge: Option<NudgeBadge>,
    pub days_since: Option<i64>,
}

/// Count of contacts per ring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RingCounts {
    pub weekly: usize,
    pub monthly: usize,
    pub quarterly: usize,
    pub drifting: usize,
}

impl RingCounts {
    pub fn get(&self, ring: Ring) -> usize {
        match ring {
            Ring::Weekly => self.weekly,
            Ring::Monthly => self.monthly,
            Ring::Quarterly => self.quarterly,
            Ring::Drifting => self.drifting,
        }
    }

    fn bump(&mut self, ring: Ring) {
        match ring {
            Ring::Weekly => self.weekly += 1,
            Ring::Monthly => self.monthly += 1,
            Ring::Quarterly => self.quarterly += 1,
            Ring::Drifting => self.drifting += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.weekly + self.monthly + self.quarterly + self.drifting
    }
}

/// All dashboard sections
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub today: NaiveDate,
    pub ring_counts: RingCounts,
    pub weekly_outreach: Vec<ScoredContact<'a>>,
    pub going_cold: Vec<ContactSummary<'a>>,
    pub close_friends_at_risk: Vec<ContactSummary<'a>>,
    pub local: Vec<ContactSummary<'a>>,
    pub long_distance: Vec<ContactSummary<'a>>,
}

impl<'a> Dashboard<'a> {
    /// Build every section from one snapshot of contacts
    pub fn build(contacts: &'a [Contact], today: NaiveDate, config: &WarmthConfig) -> Self {
        let classifier = WarmthClassifier::from_config(config);

        let mut ring_counts = RingCounts::default();
        for contact in contacts {
            ring_counts.bump(classifier.ring(contact, today));
        }

        let summarize = |list: Vec<&'a Contact>| -> Vec<ContactSummary<'a>> {
            list.into_iter()
                .map(|c| summarize_contact(&classifier, c, today))
                .collect()
        };

        let dashboard = Self {
            today,
            ring_counts,
            weekly_outreach: classifier.weekly_outreach(contacts, today, config.outreach_size),
            going_cold: summarize(classifier.going_cold(contacts, today)),
            close_friends_at_risk: summarize(classifier.close_friends_at_risk(contacts, today)),
            local: summarize(classifier.local_contacts(contacts)),
            long_distance: summarize(classifier.long_distance_contacts(contacts)),
        };

        tracing::debug!(
            contacts = contacts.len(),
            going_cold = dashboard.going_cold.len(),
            at_risk = dashboard.close_friends_at_risk.len(),
            "built dashboard"
        );
        dashboard
    }
}

/// Leading entries of a section that are rendered as cards
pub fn section_preview<T>(section: &[T]) -> &[T] {
    &section[..section.len().min(SECTION_PREVIEW_SIZE)]
}

/// Ring, badge and age for one contact
pub fn summarize_contact<'a>(
    classifier: &WarmthClassifier,
    contact: &'a Contact,
    today: NaiveDate,
) -> ContactSummary<'a> {
    ContactSummary {
        contact,
        ring: classifier.ring(contact, today),
        badge: classifier.nudge_badge(contact, today),
        days_since: contact
            .last_interaction_date
            .map(|d| crate::types::days_since(today, d)),
    }
}
