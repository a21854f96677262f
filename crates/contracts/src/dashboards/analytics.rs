//! Chart-ready series for the analytics page. All of it is fixture
//! data; there is no aggregation pipeline behind these shapes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTrendPoint {
    /// Display label for the x axis ("Jan 1", "Jan 8", ...).
    pub date: String,
    pub sales: f64,
    pub orders: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
    /// Share of total revenue, 0..=100; the fixture values sum to 100.
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGrowthPoint {
    pub month: String,
    pub new_users: u32,
    pub active_users: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub id: String,
    pub name: String,
    pub sales: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub sales_trend: Vec<SalesTrendPoint>,
    pub revenue_by_category: Vec<CategoryRevenue>,
    pub user_growth: Vec<UserGrowthPoint>,
    pub top_products: Vec<TopProduct>,
}
