use crate::shared::list_filter::FacetValue;
use serde::{Deserialize, Serialize};

/// How a coupon's `value` is applied to the cart total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponType {
    /// `value` percent off.
    Percentage,
    /// `value` currency units off.
    Fixed,
}

impl Default for CouponType {
    fn default() -> Self {
        CouponType::Percentage
    }
}

impl FacetValue for CouponType {
    fn code(&self) -> &'static str {
        match self {
            CouponType::Percentage => "percentage",
            CouponType::Fixed => "fixed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            CouponType::Percentage => "Percentage",
            CouponType::Fixed => "Fixed amount",
        }
    }

    fn all() -> Vec<CouponType> {
        vec![CouponType::Percentage, CouponType::Fixed]
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "percentage" => Some(CouponType::Percentage),
            "fixed" => Some(CouponType::Fixed),
            _ => None,
        }
    }
}
