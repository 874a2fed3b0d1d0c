//! Warmth ring definitions

use colored::Color;
use serde::{Deserialize, Serialize};

/// The four recency rings, innermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ring {
    /// Seen within a week
    Weekly,
    /// Seen within a month
    Monthly,
    /// Seen within a quarter
    Quarterly,
    /// Not seen for a quarter, or never
    Drifting,
}

impl Ring {
    /// All rings, innermost to outermost
    pub const ALL: [Ring; 4] = [Ring::Weekly, Ring::Monthly, Ring::Quarterly, Ring::Drifting];

    /// Ring number 1-4
    pub fn number(&self) -> u8 {
        match self {
            Ring::Weekly => 1,
            Ring::Monthly => 2,
            Ring::Quarterly => 3,
            Ring::Drifting => 4,
        }
    }

    /// Zero-based index into per-ring tables
    pub fn index(&self) -> usize {
        self.number() as usize - 1
    }

    /// Ring from its number, if in 1-4
    pub fn from_number(n: u8) -> Option<Ring> {
        match n {
            1 => Some(Ring::Weekly),
            2 => Some(Ring::Monthly),
            3 => Some(Ring::Quarterly),
            4 => Some(Ring::Drifting),
            _ => None,
        }
    }

    /// Label drawn next to the ring
    pub fn label(&self) -> &'static str {
        match self {
            Ring::Weekly => "Weekly",
            Ring::Monthly => "Monthly",
            Ring::Quarterly => "Quarterly",
            Ring::Drifting => "Drifting",
        }
    }

    /// Terminal color
    pub fn color(&self) -> Color {
        match self {
            Ring::Weekly => Color::Green,
            Ring::Monthly => Color::Yellow,
            Ring::Quarterly => Color::BrightYellow,
            Ring::Drifting => Color::Red,
        }
    }

    /// Get emoji for ring
    pub fn emoji(&self) -> &'static str {
        match self {
            Ring::Weekly => "🟢",
            Ring::Monthly => "🟡",
            Ring::Quarterly => "🟠",
            Ring::Drifting => "🔴",
        }
    }
}

impl std::fmt::Display for Ring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ring::Weekly => "WEEKLY",
            Ring::Monthly => "MONTHLY",
            Ring::Quarterly => "QUARTERLY",
            Ring::Drifting => "DRIFTING",
        };
        write!(f, "{}", name)
    }
}
