use crate::enums::coupon_status::CouponStatus;
use crate::enums::coupon_type::CouponType;
use crate::shared::list_filter::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A discount code. `used_count` is conceptually bounded by
/// `usage_limit` when a limit is present; the fixtures respect that and
/// no write path increments it past the limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub code: String,
    pub description: String,
    #[serde(rename = "type")]
    pub coupon_type: CouponType,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    pub used_count: u32,
    pub expiration_date: DateTime<Utc>,
    pub status: CouponStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicable_categories: Option<Vec<String>>,
}

/// Form payload for the create-coupon dialog.
#[derive(Debug, Clone)]
pub struct CouponDraft {
    pub code: String,
    pub description: String,
    pub coupon_type: CouponType,
    pub value: f64,
    pub usage_limit: Option<u32>,
    pub expiration_date: DateTime<Utc>,
}

impl Default for CouponDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            description: String::new(),
            coupon_type: CouponType::default(),
            value: 0.0,
            usage_limit: None,
            expiration_date: DateTime::UNIX_EPOCH,
        }
    }
}

impl Coupon {
    pub fn new_for_insert(draft: CouponDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            code: draft.code.trim().to_uppercase(),
            description: draft.description.trim().to_string(),
            coupon_type: draft.coupon_type,
            value: draft.value,
            minimum_amount: None,
            usage_limit: draft.usage_limit,
            used_count: 0,
            expiration_date: draft.expiration_date,
            status: CouponStatus::Active,
            applicable_categories: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Coupon code cannot be empty".into());
        }
        if self.value <= 0.0 {
            return Err("Discount value must be positive".into());
        }
        if self.coupon_type == CouponType::Percentage && self.value > 100.0 {
            return Err("Percentage discount cannot exceed 100%".into());
        }
        if let Some(limit) = self.usage_limit {
            if limit == 0 {
                return Err("Usage limit must be at least 1".into());
            }
        }
        Ok(())
    }

    /// Share of the usage limit already redeemed, 0..=100. `None` for
    /// unlimited coupons.
    pub fn usage_percent(&self) -> Option<f64> {
        self.usage_limit.map(|limit| {
            if limit == 0 {
                0.0
            } else {
                (f64::from(self.used_count) / f64::from(limit) * 100.0).min(100.0)
            }
        })
    }

    /// "25%" or "$10" depending on the coupon type.
    pub fn formatted_value(&self) -> String {
        match self.coupon_type {
            CouponType::Percentage => format!("{:.0}%", self.value),
            CouponType::Fixed => format!("${:.0}", self.value),
        }
    }

    /// Flip between active and inactive. Expired coupons stay expired.
    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            CouponStatus::Active => CouponStatus::Inactive,
            CouponStatus::Inactive => CouponStatus::Active,
            CouponStatus::Expired => CouponStatus::Expired,
        };
    }
}

impl Searchable for Coupon {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.code, &self.description]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CouponDraft {
        CouponDraft {
            code: "welcome15".to_string(),
            description: "15% off the first order".to_string(),
            coupon_type: CouponType::Percentage,
            value: 15.0,
            usage_limit: Some(200),
            expiration_date: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn insert_uppercases_code_and_starts_active() {
        let coupon = Coupon::new_for_insert(draft());
        assert_eq!(coupon.code, "WELCOME15");
        assert_eq!(coupon.status, CouponStatus::Active);
        assert_eq!(coupon.used_count, 0);
        assert!(coupon.validate().is_ok());
    }

    #[test]
    fn validation_bounds() {
        let mut coupon = Coupon::new_for_insert(draft());
        coupon.value = 0.0;
        assert!(coupon.validate().is_err());

        let mut coupon = Coupon::new_for_insert(draft());
        coupon.value = 120.0;
        assert!(coupon.validate().is_err());

        let mut coupon = Coupon::new_for_insert(draft());
        coupon.coupon_type = CouponType::Fixed;
        coupon.value = 120.0;
        assert!(coupon.validate().is_ok());

        let mut coupon = Coupon::new_for_insert(draft());
        coupon.usage_limit = Some(0);
        assert!(coupon.validate().is_err());
    }

    #[test]
    fn usage_percent_caps_at_100_and_is_none_without_limit() {
        let mut coupon = Coupon::new_for_insert(draft());
        coupon.used_count = 50;
        assert_eq!(coupon.usage_percent(), Some(25.0));

        coupon.used_count = 500;
        assert_eq!(coupon.usage_percent(), Some(100.0));

        coupon.usage_limit = None;
        assert_eq!(coupon.usage_percent(), None);
    }

    #[test]
    fn formatted_value_follows_type() {
        let mut coupon = Coupon::new_for_insert(draft());
        assert_eq!(coupon.formatted_value(), "15%");
        coupon.coupon_type = CouponType::Fixed;
        coupon.value = 10.0;
        assert_eq!(coupon.formatted_value(), "$10");
    }

    #[test]
    fn toggle_never_resurrects_expired() {
        let mut coupon = Coupon::new_for_insert(draft());
        coupon.toggle_status();
        assert_eq!(coupon.status, CouponStatus::Inactive);
        coupon.toggle_status();
        assert_eq!(coupon.status, CouponStatus::Active);

        coupon.status = CouponStatus::Expired;
        coupon.toggle_status();
        assert_eq!(coupon.status, CouponStatus::Expired);
    }
}
