//! Household laundry supplies tracked by level.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auro_core::SupplyId;

/// Days a full (100%) supply lasts at the assumed usage rate.
pub const DAYS_PER_FULL_SUPPLY: u32 = 30;

/// A consumable the user keeps at home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    pub id: SupplyId,
    pub name: String,
    pub category: String,
    /// Fill level, 0 to 100 percent.
    pub level: u8,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_days_remaining: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_reorder_threshold: Option<u8>,
    #[serde(default)]
    pub auto_reorder_enabled: bool,
    pub image: String,
}

impl Supply {
    /// Days left at a constant usage of 100% per 30 days, rounded half up.
    #[must_use]
    pub fn projected_days_remaining(&self) -> u32 {
        (u32::from(self.level) * DAYS_PER_FULL_SUPPLY + 50) / 100
    }

    /// Whether automatic reordering should kick in now.
    #[must_use]
    pub fn needs_reorder(&self) -> bool {
        self.auto_reorder_enabled
            && self
                .auto_reorder_threshold
                .is_some_and(|threshold| self.level <= threshold)
    }

    /// Whether every search term occurs in the name or category.
    pub(crate) fn matches_terms(&self, terms: &[String]) -> bool {
        let haystack = format!("{} {}", self.name, self.category).to_lowercase();
        terms.iter().all(|term| haystack.contains(term.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supply(level: u8) -> Supply {
        Supply {
            id: SupplyId::new("supply-x"),
            name: "Bleach".to_string(),
            category: "Cleaning".to_string(),
            level,
            last_updated: Utc::now(),
            estimated_days_remaining: None,
            auto_reorder_threshold: Some(20),
            auto_reorder_enabled: true,
            image: String::new(),
        }
    }

    #[test]
    fn test_projected_days_rounds_half_up() {
        assert_eq!(supply(35).projected_days_remaining(), 11);
        assert_eq!(supply(100).projected_days_remaining(), 30);
        assert_eq!(supply(0).projected_days_remaining(), 0);
        assert_eq!(supply(15).projected_days_remaining(), 5);
    }

    #[test]
    fn test_needs_reorder_at_threshold() {
        assert!(supply(20).needs_reorder());
        assert!(!supply(21).needs_reorder());

        let disabled = Supply {
            auto_reorder_enabled: false,
            ..supply(5)
        };
        assert!(!disabled.needs_reorder());
    }
}
