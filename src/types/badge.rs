//! Nudge badges recommending outreach

use serde::{Deserialize, Serialize};

/// Advisory label attached to a contact, chosen by fixed priority rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NudgeBadge {
    /// Never contacted
    ReachOut,
    /// Close relationship going stale
    Priority,
    /// Long-distance contact drifting
    CheckIn,
    /// General staleness
    Nudge,
}

impl NudgeBadge {
    /// Short label
    pub fn label(&self) -> &'static str {
        match self {
            Self::ReachOut => "reach out",
            Self::Priority => "priority",
            Self::CheckIn => "check in",
            Self::Nudge => "nudge",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::ReachOut => "🔥",
            Self::Priority => "⭐",
            Self::CheckIn => "🌎",
            Self::Nudge => "💛",
        }
    }

    /// Label as shown on a contact card, e.g. "🔥 Reach out"
    pub fn display_label(&self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        format!("{} {}", self.emoji(), capitalized)
    }
}

impl std::fmt::Display for NudgeBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_capitalizes() {
        assert_eq!(NudgeBadge::ReachOut.display_label(), "🔥 Reach out");
        assert_eq!(NudgeBadge::CheckIn.display_label(), "🌎 Check in");
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&NudgeBadge::ReachOut).unwrap();
        assert_eq!(json, "\"reach_out\"");
    }
}
