//! In-memory application store.
//!
//! One signal per collection, seeded once from the fixtures. The list
//! pages' wired actions go through the pure helpers below, so the
//! mutation rules are testable without a reactive runtime; the signal
//! methods only wrap them in `update`.

use super::fixtures;
use contracts::dashboards::analytics::AnalyticsData;
use contracts::dashboards::overview::{AIInsight, DashboardStats};
use contracts::domain::coupon::Coupon;
use contracts::domain::order::Order;
use contracts::domain::report::Report;
use contracts::domain::segment::Segment;
use contracts::domain::settings::PlatformSettings;
use contracts::domain::user::User;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;

// ---------------------------------------------------------------------------
// Pure mutation helpers
// ---------------------------------------------------------------------------

pub fn add_coupon(coupons: &mut Vec<Coupon>, coupon: Coupon) -> Result<(), String> {
    coupon.validate()?;
    if coupons
        .iter()
        .any(|existing| existing.code.eq_ignore_ascii_case(&coupon.code))
    {
        return Err(format!("Coupon code {} already exists", coupon.code));
    }
    coupons.push(coupon);
    Ok(())
}

pub fn remove_coupon(coupons: &mut Vec<Coupon>, id: &str) -> Result<(), String> {
    let before = coupons.len();
    coupons.retain(|coupon| coupon.id != id);
    if coupons.len() == before {
        return Err(format!("Unknown coupon {id}"));
    }
    Ok(())
}

pub fn toggle_coupon_status(coupons: &mut [Coupon], id: &str) -> Result<(), String> {
    let coupon = coupons
        .iter_mut()
        .find(|coupon| coupon.id == id)
        .ok_or_else(|| format!("Unknown coupon {id}"))?;
    coupon.toggle_status();
    Ok(())
}

pub fn set_order_status(
    orders: &mut [Order],
    id: &str,
    status: OrderStatus,
) -> Result<(), String> {
    let order = orders
        .iter_mut()
        .find(|order| order.id == id)
        .ok_or_else(|| format!("Unknown order {id}"))?;
    order.set_status(status);
    Ok(())
}

pub fn cancel_order(orders: &mut [Order], id: &str) -> Result<(), String> {
    let order = orders
        .iter_mut()
        .find(|order| order.id == id)
        .ok_or_else(|| format!("Unknown order {id}"))?;
    order.cancel()
}

pub fn ban_user(users: &mut [User], id: &str) -> Result<(), String> {
    let user = users
        .iter_mut()
        .find(|user| user.id == id)
        .ok_or_else(|| format!("Unknown user {id}"))?;
    user.ban();
    Ok(())
}

pub fn activate_user(users: &mut [User], id: &str) -> Result<(), String> {
    let user = users
        .iter_mut()
        .find(|user| user.id == id)
        .ok_or_else(|| format!("Unknown user {id}"))?;
    user.activate();
    Ok(())
}

pub fn add_segment(segments: &mut Vec<Segment>, segment: Segment) -> Result<(), String> {
    segment.validate()?;
    segments.push(segment);
    Ok(())
}

pub fn remove_segment(segments: &mut Vec<Segment>, id: &str) -> Result<(), String> {
    let before = segments.len();
    segments.retain(|segment| segment.id != id);
    if segments.len() == before {
        return Err(format!("Unknown segment {id}"));
    }
    Ok(())
}

pub fn mark_report_generating(reports: &mut [Report], id: &str) -> Result<(), String> {
    let report = reports
        .iter_mut()
        .find(|report| report.id == id)
        .ok_or_else(|| format!("Unknown report {id}"))?;
    report.mark_generating();
    Ok(())
}

pub fn mark_report_completed(
    reports: &mut [Report],
    id: &str,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<(), String> {
    let report = reports
        .iter_mut()
        .find(|report| report.id == id)
        .ok_or_else(|| format!("Unknown report {id}"))?;
    report.mark_completed(now);
    Ok(())
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
pub struct AppStore {
    pub users: RwSignal<Vec<User>>,
    pub orders: RwSignal<Vec<Order>>,
    pub coupons: RwSignal<Vec<Coupon>>,
    pub reports: RwSignal<Vec<Report>>,
    pub segments: RwSignal<Vec<Segment>>,
    pub insights: RwSignal<Vec<AIInsight>>,
    pub stats: RwSignal<DashboardStats>,
    pub analytics: RwSignal<AnalyticsData>,
    pub settings: RwSignal<PlatformSettings>,
}

impl AppStore {
    /// Build the store from the fixture collections. Called once from
    /// the app root; a reload reseeds everything.
    pub fn seeded() -> Self {
        Self {
            users: RwSignal::new(fixtures::USERS.clone()),
            orders: RwSignal::new(fixtures::ORDERS.clone()),
            coupons: RwSignal::new(fixtures::COUPONS.clone()),
            reports: RwSignal::new(fixtures::REPORTS.clone()),
            segments: RwSignal::new(fixtures::SEGMENTS.clone()),
            insights: RwSignal::new(fixtures::INSIGHTS.clone()),
            stats: RwSignal::new(fixtures::STATS.clone()),
            analytics: RwSignal::new(fixtures::ANALYTICS.clone()),
            settings: RwSignal::new(PlatformSettings::default()),
        }
    }

    fn apply<T: Send + Sync + 'static>(
        signal: RwSignal<Vec<T>>,
        mutate: impl FnOnce(&mut Vec<T>) -> Result<(), String>,
    ) -> Result<(), String> {
        let mut result = Ok(());
        signal.update(|items| result = mutate(items));
        if let Err(ref err) = result {
            log::warn!("store mutation rejected: {err}");
        }
        result
    }

    pub fn add_coupon(&self, coupon: Coupon) -> Result<(), String> {
        Self::apply(self.coupons, |coupons| add_coupon(coupons, coupon))
    }

    pub fn remove_coupon(&self, id: &str) -> Result<(), String> {
        Self::apply(self.coupons, |coupons| remove_coupon(coupons, id))
    }

    pub fn toggle_coupon_status(&self, id: &str) -> Result<(), String> {
        Self::apply(self.coupons, |coupons| toggle_coupon_status(coupons, id))
    }

    pub fn set_order_status(&self, id: &str, status: OrderStatus) -> Result<(), String> {
        Self::apply(self.orders, |orders| set_order_status(orders, id, status))
    }

    pub fn cancel_order(&self, id: &str) -> Result<(), String> {
        Self::apply(self.orders, |orders| cancel_order(orders, id))
    }

    pub fn ban_user(&self, id: &str) -> Result<(), String> {
        Self::apply(self.users, |users| ban_user(users, id))
    }

    pub fn activate_user(&self, id: &str) -> Result<(), String> {
        Self::apply(self.users, |users| activate_user(users, id))
    }

    pub fn add_segment(&self, segment: Segment) -> Result<(), String> {
        Self::apply(self.segments, |segments| add_segment(segments, segment))
    }

    pub fn remove_segment(&self, id: &str) -> Result<(), String> {
        Self::apply(self.segments, |segments| remove_segment(segments, id))
    }

    pub fn mark_report_generating(&self, id: &str) -> Result<(), String> {
        Self::apply(self.reports, |reports| mark_report_generating(reports, id))
    }

    pub fn mark_report_completed(
        &self,
        id: &str,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), String> {
        Self::apply(self.reports, |reports| {
            mark_report_completed(reports, id, now)
        })
    }

    /// Validate and commit a settings draft.
    pub fn save_settings(&self, draft: PlatformSettings) -> Result<(), String> {
        draft.validate()?;
        log::debug!(
            "settings payload: {}",
            serde_json::to_string(&draft).unwrap_or_default()
        );
        self.settings.set(draft);
        log::info!("settings saved");
        Ok(())
    }

    pub fn reset_settings(&self) {
        self.settings.set(PlatformSettings::default());
        log::info!("settings reset to defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::coupon::{Coupon, CouponDraft};
    use contracts::enums::coupon_status::CouponStatus;
    use contracts::enums::report_status::ReportStatus;
    use contracts::enums::user_status::UserStatus;
    use chrono::DateTime;

    #[test]
    fn add_coupon_rejects_duplicate_codes() {
        let mut coupons = fixtures::COUPONS.clone();
        let duplicate = Coupon::new_for_insert(CouponDraft {
            code: "summer25".to_string(),
            description: "dup".to_string(),
            value: 5.0,
            ..CouponDraft::default()
        });
        assert!(add_coupon(&mut coupons, duplicate).is_err());

        let fresh = Coupon::new_for_insert(CouponDraft {
            code: "AUTUMN5".to_string(),
            description: "5% off".to_string(),
            value: 5.0,
            ..CouponDraft::default()
        });
        let before = coupons.len();
        assert!(add_coupon(&mut coupons, fresh).is_ok());
        assert_eq!(coupons.len(), before + 1);
    }

    #[test]
    fn remove_unknown_coupon_is_an_error_not_a_panic() {
        let mut coupons = fixtures::COUPONS.clone();
        assert!(remove_coupon(&mut coupons, "CPN-999").is_err());
        assert!(remove_coupon(&mut coupons, "CPN-001").is_ok());
        assert!(coupons.iter().all(|c| c.id != "CPN-001"));
    }

    #[test]
    fn toggle_flips_active_coupons_only() {
        let mut coupons = fixtures::COUPONS.clone();
        assert!(toggle_coupon_status(&mut coupons, "CPN-001").is_ok());
        let toggled = coupons.iter().find(|c| c.id == "CPN-001").unwrap();
        assert_eq!(toggled.status, CouponStatus::Inactive);

        // CPN-003 is expired; toggling must not resurrect it.
        assert!(toggle_coupon_status(&mut coupons, "CPN-003").is_ok());
        let expired = coupons.iter().find(|c| c.id == "CPN-003").unwrap();
        assert_eq!(expired.status, CouponStatus::Expired);
    }

    #[test]
    fn cancel_order_respects_terminal_states() {
        let mut orders = fixtures::ORDERS.clone();
        // Pending order cancels fine.
        assert!(cancel_order(&mut orders, "ORD-2024-1004").is_ok());
        // Refunded order refuses.
        assert!(cancel_order(&mut orders, "ORD-2024-1006").is_err());
        // Unknown id is an error.
        assert!(cancel_order(&mut orders, "ORD-0000-0000").is_err());
    }

    #[test]
    fn ban_and_activate_user() {
        let mut users = fixtures::USERS.clone();
        assert!(ban_user(&mut users, "USR-003").is_ok());
        assert_eq!(
            users.iter().find(|u| u.id == "USR-003").unwrap().status,
            UserStatus::Banned
        );
        assert!(activate_user(&mut users, "USR-003").is_ok());
        assert_eq!(
            users.iter().find(|u| u.id == "USR-003").unwrap().status,
            UserStatus::Active
        );
    }

    #[test]
    fn report_regeneration_flow() {
        let mut reports = fixtures::REPORTS.clone();
        assert!(mark_report_generating(&mut reports, "RPT-005").is_ok());
        assert_eq!(
            reports.iter().find(|r| r.id == "RPT-005").unwrap().status,
            ReportStatus::Generating
        );
        let now = DateTime::UNIX_EPOCH;
        assert!(mark_report_completed(&mut reports, "RPT-005", now).is_ok());
        let report = reports.iter().find(|r| r.id == "RPT-005").unwrap();
        assert_eq!(report.status, ReportStatus::Completed);
        assert_eq!(report.last_generated, now);
    }

    #[test]
    fn add_segment_validates() {
        let mut segments = fixtures::SEGMENTS.clone();
        let invalid = contracts::domain::segment::Segment::new_for_insert(
            String::new(),
            "desc".to_string(),
            "criteria".to_string(),
            "#000000".to_string(),
            DateTime::UNIX_EPOCH,
        );
        assert!(add_segment(&mut segments, invalid).is_err());
    }
}
