use crate::enums::insight::{InsightCategory, InsightImpact, InsightType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline figures for the overview dashboard, with growth relative to
/// the previous period (percent, may be negative).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: u32,
    pub total_users: u32,
    pub total_revenue: f64,
    pub total_refunds: f64,
    pub orders_growth: f64,
    pub users_growth: f64,
    pub revenue_growth: f64,
    pub refunds_growth: f64,
}

/// A pre-baked insight record rendered on the overview page. These are
/// fixtures; there is no inference behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AIInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    pub impact: InsightImpact,
    pub category: InsightCategory,
    pub actionable: bool,
    pub created_at: DateTime<Utc>,
}
