use crate::shared::list_filter::FacetValue;
use serde::{Deserialize, Serialize};

/// Behavioural segment a customer currently falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserSegment {
    Premium,
    Regular,
    New,
    Churned,
}

impl FacetValue for UserSegment {
    fn code(&self) -> &'static str {
        match self {
            UserSegment::Premium => "premium",
            UserSegment::Regular => "regular",
            UserSegment::New => "new",
            UserSegment::Churned => "churned",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            UserSegment::Premium => "Premium",
            UserSegment::Regular => "Regular",
            UserSegment::New => "New",
            UserSegment::Churned => "Churned",
        }
    }

    fn all() -> Vec<UserSegment> {
        vec![
            UserSegment::Premium,
            UserSegment::Regular,
            UserSegment::New,
            UserSegment::Churned,
        ]
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "premium" => Some(UserSegment::Premium),
            "regular" => Some(UserSegment::Regular),
            "new" => Some(UserSegment::New),
            "churned" => Some(UserSegment::Churned),
            _ => None,
        }
    }
}
