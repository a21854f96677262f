use crate::shared::list_filter::FacetValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponStatus {
    Active,
    Inactive,
    Expired,
}

impl FacetValue for CouponStatus {
    fn code(&self) -> &'static str {
        match self {
            CouponStatus::Active => "active",
            CouponStatus::Inactive => "inactive",
            CouponStatus::Expired => "expired",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            CouponStatus::Active => "Active",
            CouponStatus::Inactive => "Inactive",
            CouponStatus::Expired => "Expired",
        }
    }

    fn all() -> Vec<CouponStatus> {
        vec![
            CouponStatus::Active,
            CouponStatus::Inactive,
            CouponStatus::Expired,
        ]
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(CouponStatus::Active),
            "inactive" => Some(CouponStatus::Inactive),
            "expired" => Some(CouponStatus::Expired),
            _ => None,
        }
    }
}
