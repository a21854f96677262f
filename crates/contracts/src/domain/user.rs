use crate::enums::user_role::UserRole;
use crate::enums::user_segment::UserSegment;
use crate::enums::user_status::UserStatus;
use crate::shared::list_filter::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A platform account as the admin UI sees it: a snapshot of identity,
/// access level and purchase history rollups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub segment: UserSegment,
    pub registration_date: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub total_orders: u32,
    pub total_spent: f64,
    pub location: String,
}

impl User {
    pub fn new_for_insert(
        name: String,
        email: String,
        role: UserRole,
        segment: UserSegment,
        location: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            role,
            status: UserStatus::Active,
            segment,
            registration_date: now,
            last_login: now,
            total_orders: 0,
            total_spent: 0.0,
            location,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        if !self.email.contains('@') || self.email.trim().len() < 3 {
            return Err("Email address is not valid".into());
        }
        Ok(())
    }

    /// First letters of up to two name words, for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
    }

    pub fn ban(&mut self) {
        self.status = UserStatus::Banned;
    }

    pub fn activate(&mut self) {
        self.status = UserStatus::Active;
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new_for_insert(
            "Jane Cooper".to_string(),
            "jane.cooper@example.com".to_string(),
            UserRole::Customer,
            UserSegment::New,
            "Austin, USA".to_string(),
            DateTime::UNIX_EPOCH,
        )
    }

    #[test]
    fn new_users_start_active_with_zero_history() {
        let user = sample();
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.total_orders, 0);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn validation_rejects_blank_name_and_bad_email() {
        let mut user = sample();
        user.name = "  ".to_string();
        assert!(user.validate().is_err());

        let mut user = sample();
        user.email = "not-an-email".to_string();
        assert!(user.validate().is_err());
    }

    #[test]
    fn ban_and_activate_flip_status() {
        let mut user = sample();
        user.ban();
        assert_eq!(user.status, UserStatus::Banned);
        user.activate();
        assert_eq!(user.status, UserStatus::Active);
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(sample().initials(), "JC");
        let mut user = sample();
        user.name = "Plato".to_string();
        assert_eq!(user.initials(), "P");
    }

    #[test]
    fn search_covers_name_and_email() {
        let user = sample();
        assert!(user.matches_search("jane"));
        assert!(user.matches_search("COOPER@EXAMPLE"));
        assert!(!user.matches_search("austin"));
    }
}
