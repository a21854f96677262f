//! Classification enums for the pre-baked AI insight records shown on
//! the overview dashboard. They drive icon and colour choice only; no
//! inference sits behind them.

use crate::shared::list_filter::FacetValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Recommendation,
    Alert,
    Prediction,
    Optimization,
}

impl FacetValue for InsightType {
    fn code(&self) -> &'static str {
        match self {
            InsightType::Recommendation => "recommendation",
            InsightType::Alert => "alert",
            InsightType::Prediction => "prediction",
            InsightType::Optimization => "optimization",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            InsightType::Recommendation => "Recommendation",
            InsightType::Alert => "Alert",
            InsightType::Prediction => "Prediction",
            InsightType::Optimization => "Optimization",
        }
    }

    fn all() -> Vec<InsightType> {
        vec![
            InsightType::Recommendation,
            InsightType::Alert,
            InsightType::Prediction,
            InsightType::Optimization,
        ]
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "recommendation" => Some(InsightType::Recommendation),
            "alert" => Some(InsightType::Alert),
            "prediction" => Some(InsightType::Prediction),
            "optimization" => Some(InsightType::Optimization),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightImpact {
    High,
    Medium,
    Low,
}

impl FacetValue for InsightImpact {
    fn code(&self) -> &'static str {
        match self {
            InsightImpact::High => "high",
            InsightImpact::Medium => "medium",
            InsightImpact::Low => "low",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            InsightImpact::High => "High impact",
            InsightImpact::Medium => "Medium impact",
            InsightImpact::Low => "Low impact",
        }
    }

    fn all() -> Vec<InsightImpact> {
        vec![InsightImpact::High, InsightImpact::Medium, InsightImpact::Low]
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "high" => Some(InsightImpact::High),
            "medium" => Some(InsightImpact::Medium),
            "low" => Some(InsightImpact::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Sales,
    Inventory,
    Marketing,
    Customer,
}

impl FacetValue for InsightCategory {
    fn code(&self) -> &'static str {
        match self {
            InsightCategory::Sales => "sales",
            InsightCategory::Inventory => "inventory",
            InsightCategory::Marketing => "marketing",
            InsightCategory::Customer => "customer",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            InsightCategory::Sales => "Sales",
            InsightCategory::Inventory => "Inventory",
            InsightCategory::Marketing => "Marketing",
            InsightCategory::Customer => "Customer",
        }
    }

    fn all() -> Vec<InsightCategory> {
        vec![
            InsightCategory::Sales,
            InsightCategory::Inventory,
            InsightCategory::Marketing,
            InsightCategory::Customer,
        ]
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "sales" => Some(InsightCategory::Sales),
            "inventory" => Some(InsightCategory::Inventory),
            "marketing" => Some(InsightCategory::Marketing),
            "customer" => Some(InsightCategory::Customer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for t in InsightType::all() {
            assert_eq!(InsightType::from_code(t.code()), Some(t));
        }
        for i in InsightImpact::all() {
            assert_eq!(InsightImpact::from_code(i.code()), Some(i));
        }
        for c in InsightCategory::all() {
            assert_eq!(InsightCategory::from_code(c.code()), Some(c));
        }
    }
}
