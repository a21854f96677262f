use crate::shared::list_filter::FacetValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Completed,
    Generating,
    Failed,
}

impl FacetValue for ReportStatus {
    fn code(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "completed",
            ReportStatus::Generating => "generating",
            ReportStatus::Failed => "failed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "Completed",
            ReportStatus::Generating => "Generating",
            ReportStatus::Failed => "Failed",
        }
    }

    fn all() -> Vec<ReportStatus> {
        vec![
            ReportStatus::Completed,
            ReportStatus::Generating,
            ReportStatus::Failed,
        ]
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" => Some(ReportStatus::Completed),
            "generating" => Some(ReportStatus::Generating),
            "failed" => Some(ReportStatus::Failed),
            _ => None,
        }
    }
}
