use crate::shared::list_filter::FacetValue;
use serde::{Deserialize, Serialize};

/// Account state of a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Banned,
}

impl FacetValue for UserStatus {
    fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Banned => "banned",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Banned => "Banned",
        }
    }

    fn all() -> Vec<UserStatus> {
        vec![UserStatus::Active, UserStatus::Inactive, UserStatus::Banned]
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(UserStatus::Active),
            "inactive" => Some(UserStatus::Inactive),
            "banned" => Some(UserStatus::Banned),
            _ => None,
        }
    }
}
