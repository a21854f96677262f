use serde::{Deserialize, Serialize};

/// Platform-wide preferences edited on the settings page. Held in
/// memory only; "save" commits the draft to the store, "reset" restores
/// these defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettings {
    // General
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_address: String,
    pub timezone: String,
    pub currency: String,
    pub language: String,

    // Notifications
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub order_notifications: bool,
    pub inventory_alerts: bool,
    pub marketing_emails: bool,
    pub weekly_reports: bool,

    // Security
    pub two_factor_auth: bool,
    pub session_timeout_minutes: u32,
    pub password_expiry_days: u32,
    pub max_login_attempts: u32,

    // Appearance
    pub animations: bool,
    pub compact_mode: bool,
    pub sidebar_collapsed: bool,

    // API
    pub api_rate_limit: u32,
    pub webhook_url: String,
    pub api_version: String,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            company_name: "ECommerce Store".to_string(),
            company_email: "admin@ecommerce.com".to_string(),
            company_phone: "+1 (555) 123-4567".to_string(),
            company_address: "123 Business St, City, State 12345".to_string(),
            timezone: "UTC-5".to_string(),
            currency: "USD".to_string(),
            language: "en".to_string(),

            email_notifications: true,
            push_notifications: true,
            order_notifications: true,
            inventory_alerts: true,
            marketing_emails: false,
            weekly_reports: true,

            two_factor_auth: false,
            session_timeout_minutes: 30,
            password_expiry_days: 90,
            max_login_attempts: 5,

            animations: true,
            compact_mode: false,
            sidebar_collapsed: false,

            api_rate_limit: 1000,
            webhook_url: String::new(),
            api_version: "v1".to_string(),
        }
    }
}

impl PlatformSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.company_name.trim().is_empty() {
            return Err("Company name cannot be empty".into());
        }
        if !self.company_email.contains('@') {
            return Err("Company email is not valid".into());
        }
        if !self.webhook_url.is_empty()
            && !self.webhook_url.starts_with("http://")
            && !self.webhook_url.starts_with("https://")
        {
            return Err("Webhook URL must start with http:// or https://".into());
        }
        if self.max_login_attempts == 0 {
            return Err("Login attempt limit must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PlatformSettings::default().validate().is_ok());
    }

    #[test]
    fn webhook_url_must_be_http_when_present() {
        let mut settings = PlatformSettings::default();
        settings.webhook_url = "ftp://example.com/hook".to_string();
        assert!(settings.validate().is_err());

        settings.webhook_url = "https://example.com/hook".to_string();
        assert!(settings.validate().is_ok());

        settings.webhook_url = String::new();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn company_identity_is_required() {
        let mut settings = PlatformSettings::default();
        settings.company_name = " ".to_string();
        assert!(settings.validate().is_err());

        let mut settings = PlatformSettings::default();
        settings.company_email = "nope".to_string();
        assert!(settings.validate().is_err());
    }
}
