use crate::shared::list_filter::FacetValue;
use serde::{Deserialize, Serialize};

/// Business area a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Sales,
    Customers,
    Inventory,
    Financial,
    Marketing,
}

impl FacetValue for ReportType {
    fn code(&self) -> &'static str {
        match self {
            ReportType::Sales => "sales",
            ReportType::Customers => "customers",
            ReportType::Inventory => "inventory",
            ReportType::Financial => "financial",
            ReportType::Marketing => "marketing",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ReportType::Sales => "Sales",
            ReportType::Customers => "Customers",
            ReportType::Inventory => "Inventory",
            ReportType::Financial => "Financial",
            ReportType::Marketing => "Marketing",
        }
    }

    fn all() -> Vec<ReportType> {
        vec![
            ReportType::Sales,
            ReportType::Customers,
            ReportType::Inventory,
            ReportType::Financial,
            ReportType::Marketing,
        ]
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "sales" => Some(ReportType::Sales),
            "customers" => Some(ReportType::Customers),
            "inventory" => Some(ReportType::Inventory),
            "financial" => Some(ReportType::Financial),
            "marketing" => Some(ReportType::Marketing),
            _ => None,
        }
    }
}
