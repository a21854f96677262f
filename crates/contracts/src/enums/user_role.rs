use crate::shared::list_filter::FacetValue;
use serde::{Deserialize, Serialize};

/// Access level of a platform account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Customer,
}

impl FacetValue for UserRole {
    fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Customer => "customer",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::Customer => "Customer",
        }
    }

    fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::Manager, UserRole::Customer]
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            "customer" => Some(UserRole::Customer),
            _ => None,
        }
    }
}
