use crate::shared::list_filter::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named customer group with a human-readable targeting criteria
/// string. `user_count` is a snapshot taken when the segment was built;
/// the page recomputes it for the built-in segments from the user
/// fixtures at seed time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub criteria: String,
    pub user_count: u32,
    /// Hex colour used by the distribution chart and the card chip.
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Segment {
    pub fn new_for_insert(
        name: String,
        description: String,
        criteria: String,
        color: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            criteria: criteria.trim().to_string(),
            user_count: 0,
            color,
            created_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Segment name cannot be empty".into());
        }
        if self.criteria.trim().is_empty() {
            return Err("Segment criteria cannot be empty".into());
        }
        Ok(())
    }

    /// Share of `total` users captured by this segment, 0 when the
    /// platform has no users.
    pub fn share_percent(&self, total: u32) -> f64 {
        if total == 0 {
            0.0
        } else {
            f64::from(self.user_count) / f64::from(total) * 100.0
        }
    }
}

impl Searchable for Segment {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Segment {
        Segment::new_for_insert(
            "  Premium Customers ".to_string(),
            "High-value customers".to_string(),
            "Total spent > $500".to_string(),
            "#8B5CF6".to_string(),
            DateTime::UNIX_EPOCH,
        )
    }

    #[test]
    fn insert_trims_fields_and_starts_empty() {
        let segment = sample();
        assert_eq!(segment.name, "Premium Customers");
        assert_eq!(segment.user_count, 0);
        assert!(segment.validate().is_ok());
    }

    #[test]
    fn validation_requires_name_and_criteria() {
        let mut segment = sample();
        segment.name = String::new();
        assert!(segment.validate().is_err());

        let mut segment = sample();
        segment.criteria = "  ".to_string();
        assert!(segment.validate().is_err());
    }

    #[test]
    fn share_percent_handles_zero_total() {
        let mut segment = sample();
        segment.user_count = 25;
        assert!((segment.share_percent(100) - 25.0).abs() < 1e-9);
        assert_eq!(segment.share_percent(0), 0.0);
    }
}
