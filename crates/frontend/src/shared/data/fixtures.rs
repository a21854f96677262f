//! Hand-authored sample data standing in for a real data source. Every
//! collection is built once behind a `Lazy` and cloned into the store
//! at startup; nothing here is ever persisted.

use chrono::{DateTime, TimeZone, Utc};
use contracts::dashboards::analytics::{
    AnalyticsData, CategoryRevenue, SalesTrendPoint, TopProduct, UserGrowthPoint,
};
use contracts::dashboards::overview::{AIInsight, DashboardStats};
use contracts::domain::coupon::Coupon;
use contracts::domain::order::{Address, Order, OrderItem};
use contracts::domain::report::Report;
use contracts::domain::segment::Segment;
use contracts::domain::user::User;
use contracts::enums::coupon_status::CouponStatus;
use contracts::enums::coupon_type::CouponType;
use contracts::enums::insight::{InsightCategory, InsightImpact, InsightType};
use contracts::enums::order_status::OrderStatus;
use contracts::enums::report_status::ReportStatus;
use contracts::enums::report_type::ReportType;
use contracts::enums::user_role::UserRole;
use contracts::enums::user_segment::UserSegment;
use contracts::enums::user_status::UserStatus;
use once_cell::sync::Lazy;

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    status: UserStatus,
    segment: UserSegment,
    registered: DateTime<Utc>,
    last_login: DateTime<Utc>,
    total_orders: u32,
    total_spent: f64,
    location: &str,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        segment,
        registration_date: registered,
        last_login,
        total_orders,
        total_spent,
        location: location.to_string(),
    }
}

pub static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        user(
            "USR-001",
            "Sarah Johnson",
            "sarah.johnson@example.com",
            UserRole::Admin,
            UserStatus::Active,
            UserSegment::Premium,
            date(2023, 1, 15),
            datetime(2024, 6, 14, 9, 12),
            48,
            5240.75,
            "New York, USA",
        ),
        user(
            "USR-002",
            "Michael Chen",
            "michael.chen@example.com",
            UserRole::Manager,
            UserStatus::Active,
            UserSegment::Regular,
            date(2023, 3, 2),
            datetime(2024, 6, 13, 18, 40),
            21,
            1890.00,
            "San Francisco, USA",
        ),
        user(
            "USR-003",
            "Emma Davis",
            "emma.davis@example.com",
            UserRole::Customer,
            UserStatus::Active,
            UserSegment::Premium,
            date(2023, 5, 21),
            datetime(2024, 6, 12, 13, 5),
            35,
            3420.10,
            "Chicago, USA",
        ),
        user(
            "USR-004",
            "James Wilson",
            "james.wilson@example.com",
            UserRole::Customer,
            UserStatus::Inactive,
            UserSegment::Churned,
            date(2022, 11, 8),
            datetime(2024, 2, 1, 8, 30),
            12,
            640.25,
            "Austin, USA",
        ),
        user(
            "USR-005",
            "Olivia Martinez",
            "olivia.martinez@example.com",
            UserRole::Customer,
            UserStatus::Active,
            UserSegment::New,
            date(2024, 5, 30),
            datetime(2024, 6, 14, 20, 15),
            2,
            129.98,
            "Miami, USA",
        ),
        user(
            "USR-006",
            "Liam Anderson",
            "liam.anderson@example.com",
            UserRole::Customer,
            UserStatus::Banned,
            UserSegment::Regular,
            date(2023, 7, 12),
            datetime(2024, 4, 22, 11, 45),
            9,
            410.00,
            "Seattle, USA",
        ),
        user(
            "USR-007",
            "Ava Thompson",
            "ava.thompson@example.com",
            UserRole::Customer,
            UserStatus::Active,
            UserSegment::Regular,
            date(2023, 9, 3),
            datetime(2024, 6, 10, 16, 2),
            17,
            980.40,
            "Denver, USA",
        ),
        user(
            "USR-008",
            "Noah Garcia",
            "noah.garcia@example.com",
            UserRole::Customer,
            UserStatus::Active,
            UserSegment::New,
            date(2024, 6, 5),
            datetime(2024, 6, 14, 7, 55),
            1,
            59.99,
            "Boston, USA",
        ),
    ]
});

fn address(street: &str, city: &str, state: &str, zip: &str) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip.to_string(),
        country: "USA".to_string(),
    }
}

fn item(name: &str, quantity: u32, price: f64) -> OrderItem {
    OrderItem {
        product_name: name.to_string(),
        quantity,
        price,
    }
}

pub static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        Order {
            id: "ORD-2024-1001".to_string(),
            user_name: "Sarah Johnson".to_string(),
            user_email: "sarah.johnson@example.com".to_string(),
            items: vec![
                item("Wireless Headphones", 1, 129.99),
                item("USB-C Charging Cable", 2, 14.50),
            ],
            total: 158.99,
            status: OrderStatus::Delivered,
            created_at: datetime(2024, 6, 2, 10, 24),
            shipping_address: address("221 W 38th St", "New York", "NY", "10018"),
            payment_method: "Credit Card".to_string(),
            tracking_number: Some("TRK-448291073".to_string()),
        },
        Order {
            id: "ORD-2024-1002".to_string(),
            user_name: "Emma Davis".to_string(),
            user_email: "emma.davis@example.com".to_string(),
            items: vec![item("Smart Watch Series 5", 1, 299.00)],
            total: 299.00,
            status: OrderStatus::Shipped,
            created_at: datetime(2024, 6, 8, 14, 3),
            shipping_address: address("500 N Michigan Ave", "Chicago", "IL", "60611"),
            payment_method: "PayPal".to_string(),
            tracking_number: Some("TRK-448291188".to_string()),
        },
        Order {
            id: "ORD-2024-1003".to_string(),
            user_name: "Olivia Martinez".to_string(),
            user_email: "olivia.martinez@example.com".to_string(),
            items: vec![
                item("Yoga Mat", 1, 39.99),
                item("Water Bottle 1L", 1, 19.99),
            ],
            total: 59.98,
            status: OrderStatus::Processing,
            created_at: datetime(2024, 6, 12, 9, 47),
            shipping_address: address("801 Brickell Ave", "Miami", "FL", "33131"),
            payment_method: "Credit Card".to_string(),
            tracking_number: None,
        },
        Order {
            id: "ORD-2024-1004".to_string(),
            user_name: "Ava Thompson".to_string(),
            user_email: "ava.thompson@example.com".to_string(),
            items: vec![item("Espresso Machine", 1, 449.00)],
            total: 449.00,
            status: OrderStatus::Pending,
            created_at: datetime(2024, 6, 14, 19, 21),
            shipping_address: address("1701 Wynkoop St", "Denver", "CO", "80202"),
            payment_method: "Credit Card".to_string(),
            tracking_number: None,
        },
        Order {
            id: "ORD-2024-1005".to_string(),
            user_name: "Michael Chen".to_string(),
            user_email: "michael.chen@example.com".to_string(),
            items: vec![
                item("Mechanical Keyboard", 1, 159.00),
                item("Mouse Pad XL", 1, 24.00),
            ],
            total: 183.00,
            status: OrderStatus::Cancelled,
            created_at: datetime(2024, 6, 5, 16, 58),
            shipping_address: address("1 Market St", "San Francisco", "CA", "94105"),
            payment_method: "Apple Pay".to_string(),
            tracking_number: None,
        },
        Order {
            id: "ORD-2024-1006".to_string(),
            user_name: "Noah Garcia".to_string(),
            user_email: "noah.garcia@example.com".to_string(),
            items: vec![item("Running Shoes", 1, 89.99)],
            total: 89.99,
            status: OrderStatus::Refunded,
            created_at: datetime(2024, 5, 28, 12, 10),
            shipping_address: address("100 Summer St", "Boston", "MA", "02110"),
            payment_method: "Credit Card".to_string(),
            tracking_number: Some("TRK-447900112".to_string()),
        },
    ]
});

pub static COUPONS: Lazy<Vec<Coupon>> = Lazy::new(|| {
    vec![
        Coupon {
            id: "CPN-001".to_string(),
            code: "SUMMER25".to_string(),
            description: "25% off summer collection".to_string(),
            coupon_type: CouponType::Percentage,
            value: 25.0,
            minimum_amount: Some(50.0),
            usage_limit: Some(1000),
            used_count: 342,
            expiration_date: date(2024, 8, 31),
            status: CouponStatus::Active,
            applicable_categories: Some(vec![
                "Clothing".to_string(),
                "Accessories".to_string(),
            ]),
        },
        Coupon {
            id: "CPN-002".to_string(),
            code: "WELCOME10".to_string(),
            description: "$10 off your first order".to_string(),
            coupon_type: CouponType::Fixed,
            value: 10.0,
            minimum_amount: Some(30.0),
            usage_limit: None,
            used_count: 1583,
            expiration_date: date(2024, 12, 31),
            status: CouponStatus::Active,
            applicable_categories: None,
        },
        Coupon {
            id: "CPN-003".to_string(),
            code: "FREESHIP".to_string(),
            description: "Free shipping on orders over $75".to_string(),
            coupon_type: CouponType::Fixed,
            value: 9.99,
            minimum_amount: Some(75.0),
            usage_limit: Some(500),
            used_count: 500,
            expiration_date: date(2024, 6, 1),
            status: CouponStatus::Expired,
            applicable_categories: None,
        },
        Coupon {
            id: "CPN-004".to_string(),
            code: "VIP30".to_string(),
            description: "30% off for premium members".to_string(),
            coupon_type: CouponType::Percentage,
            value: 30.0,
            minimum_amount: None,
            usage_limit: Some(200),
            used_count: 58,
            expiration_date: date(2024, 9, 30),
            status: CouponStatus::Inactive,
            applicable_categories: Some(vec!["Electronics".to_string()]),
        },
        Coupon {
            id: "CPN-005".to_string(),
            code: "FLASH15".to_string(),
            description: "15% off flash sale".to_string(),
            coupon_type: CouponType::Percentage,
            value: 15.0,
            minimum_amount: None,
            usage_limit: Some(300),
            used_count: 121,
            expiration_date: date(2024, 7, 15),
            status: CouponStatus::Active,
            applicable_categories: None,
        },
    ]
});

pub static REPORTS: Lazy<Vec<Report>> = Lazy::new(|| {
    vec![
        Report {
            id: "RPT-001".to_string(),
            name: "Sales Performance Report".to_string(),
            description: "Comprehensive analysis of sales trends and performance metrics"
                .to_string(),
            report_type: ReportType::Sales,
            cadence: "Monthly".to_string(),
            status: ReportStatus::Completed,
            last_generated: datetime(2024, 6, 13, 6, 0),
            size_label: "2.4 MB".to_string(),
            file_format: "PDF".to_string(),
            metrics: vec![
                "Revenue".to_string(),
                "Orders".to_string(),
                "Conversion Rate".to_string(),
                "AOV".to_string(),
            ],
        },
        Report {
            id: "RPT-002".to_string(),
            name: "Customer Analytics Report".to_string(),
            description: "Detailed insights into customer behavior and segmentation".to_string(),
            report_type: ReportType::Customers,
            cadence: "Weekly".to_string(),
            status: ReportStatus::Completed,
            last_generated: datetime(2024, 6, 11, 6, 0),
            size_label: "1.8 MB".to_string(),
            file_format: "Excel".to_string(),
            metrics: vec![
                "New Customers".to_string(),
                "Retention Rate".to_string(),
                "CLV".to_string(),
                "Churn Rate".to_string(),
            ],
        },
        Report {
            id: "RPT-003".to_string(),
            name: "Inventory Report".to_string(),
            description: "Stock levels, turnover rates, and inventory optimization".to_string(),
            report_type: ReportType::Inventory,
            cadence: "Daily".to_string(),
            status: ReportStatus::Generating,
            last_generated: datetime(2024, 6, 14, 6, 0),
            size_label: "1.2 MB".to_string(),
            file_format: "CSV".to_string(),
            metrics: vec![
                "Stock Levels".to_string(),
                "Turnover Rate".to_string(),
                "Low Stock Alerts".to_string(),
            ],
        },
        Report {
            id: "RPT-004".to_string(),
            name: "Financial Summary".to_string(),
            description: "Revenue, expenses, and profit analysis".to_string(),
            report_type: ReportType::Financial,
            cadence: "Quarterly".to_string(),
            status: ReportStatus::Completed,
            last_generated: datetime(2024, 6, 7, 6, 0),
            size_label: "3.1 MB".to_string(),
            file_format: "PDF".to_string(),
            metrics: vec![
                "Revenue".to_string(),
                "Expenses".to_string(),
                "Profit Margin".to_string(),
                "Tax Summary".to_string(),
            ],
        },
        Report {
            id: "RPT-005".to_string(),
            name: "Marketing Campaign Report".to_string(),
            description: "Campaign performance and ROI analysis".to_string(),
            report_type: ReportType::Marketing,
            cadence: "Monthly".to_string(),
            status: ReportStatus::Failed,
            last_generated: datetime(2024, 6, 12, 6, 0),
            size_label: "0 MB".to_string(),
            file_format: "PDF".to_string(),
            metrics: vec![
                "Campaign ROI".to_string(),
                "Click-through Rate".to_string(),
                "Conversion Rate".to_string(),
            ],
        },
    ]
});

/// The four built-in segments. `user_count` is recomputed from the user
/// fixtures so the segmentation page and the users page always agree.
pub static SEGMENTS: Lazy<Vec<Segment>> = Lazy::new(|| {
    let count = |segment: UserSegment| {
        USERS.iter().filter(|u| u.segment == segment).count() as u32
    };
    vec![
        Segment {
            id: "SEG-001".to_string(),
            name: "Premium Customers".to_string(),
            description: "High-value customers with multiple purchases".to_string(),
            criteria: "Total spent > $500 AND Orders > 5".to_string(),
            user_count: count(UserSegment::Premium),
            color: "#8B5CF6".to_string(),
            created_at: date(2024, 1, 15),
        },
        Segment {
            id: "SEG-002".to_string(),
            name: "Regular Customers".to_string(),
            description: "Consistent customers with moderate spending".to_string(),
            criteria: "Total spent $100-$500 AND Orders 2-5".to_string(),
            user_count: count(UserSegment::Regular),
            color: "#3B82F6".to_string(),
            created_at: date(2024, 1, 10),
        },
        Segment {
            id: "SEG-003".to_string(),
            name: "New Customers".to_string(),
            description: "Recently registered customers".to_string(),
            criteria: "Registration date < 30 days".to_string(),
            user_count: count(UserSegment::New),
            color: "#10B981".to_string(),
            created_at: date(2024, 1, 20),
        },
        Segment {
            id: "SEG-004".to_string(),
            name: "At-Risk Customers".to_string(),
            description: "Customers who haven't purchased recently".to_string(),
            criteria: "Last order > 90 days ago".to_string(),
            user_count: count(UserSegment::Churned),
            color: "#EF4444".to_string(),
            created_at: date(2024, 1, 5),
        },
    ]
});

pub static STATS: Lazy<DashboardStats> = Lazy::new(|| DashboardStats {
    total_orders: 1284,
    total_users: 3427,
    total_revenue: 248_590.0,
    total_refunds: 4320.0,
    orders_growth: 12.5,
    users_growth: 8.2,
    revenue_growth: 15.3,
    refunds_growth: -3.1,
});

pub static INSIGHTS: Lazy<Vec<AIInsight>> = Lazy::new(|| {
    vec![
        AIInsight {
            id: "INS-001".to_string(),
            insight_type: InsightType::Recommendation,
            title: "Bundle headphones with charging cables".to_string(),
            description: "62% of headphone orders also include a cable. A bundle could lift AOV by an estimated 8%."
                .to_string(),
            impact: InsightImpact::High,
            category: InsightCategory::Sales,
            actionable: true,
            created_at: datetime(2024, 6, 14, 5, 30),
        },
        AIInsight {
            id: "INS-002".to_string(),
            insight_type: InsightType::Alert,
            title: "Espresso Machine stock running low".to_string(),
            description: "Projected to sell out in 6 days at the current run rate; lead time is 14 days."
                .to_string(),
            impact: InsightImpact::High,
            category: InsightCategory::Inventory,
            actionable: true,
            created_at: datetime(2024, 6, 14, 5, 30),
        },
        AIInsight {
            id: "INS-003".to_string(),
            insight_type: InsightType::Prediction,
            title: "June revenue tracking 9% above May".to_string(),
            description: "Based on the first two weeks, projected month-end revenue is $92k."
                .to_string(),
            impact: InsightImpact::Medium,
            category: InsightCategory::Sales,
            actionable: false,
            created_at: datetime(2024, 6, 13, 5, 30),
        },
        AIInsight {
            id: "INS-004".to_string(),
            insight_type: InsightType::Optimization,
            title: "Re-engage churned premium customers".to_string(),
            description: "41 previously premium customers have not ordered in 90 days; a win-back campaign historically converts 12%."
                .to_string(),
            impact: InsightImpact::Medium,
            category: InsightCategory::Marketing,
            actionable: true,
            created_at: datetime(2024, 6, 12, 5, 30),
        },
        AIInsight {
            id: "INS-005".to_string(),
            insight_type: InsightType::Recommendation,
            title: "Enable weekend flash sales".to_string(),
            description: "Weekend conversion is 18% above weekday average; limited-time offers could amplify it."
                .to_string(),
            impact: InsightImpact::Low,
            category: InsightCategory::Customer,
            actionable: true,
            created_at: datetime(2024, 6, 10, 5, 30),
        },
    ]
});

pub static ANALYTICS: Lazy<AnalyticsData> = Lazy::new(|| AnalyticsData {
    sales_trend: vec![
        SalesTrendPoint { date: "May 1".to_string(), sales: 4200.0, orders: 61 },
        SalesTrendPoint { date: "May 8".to_string(), sales: 4850.0, orders: 69 },
        SalesTrendPoint { date: "May 15".to_string(), sales: 4530.0, orders: 64 },
        SalesTrendPoint { date: "May 22".to_string(), sales: 5320.0, orders: 75 },
        SalesTrendPoint { date: "May 29".to_string(), sales: 5910.0, orders: 82 },
        SalesTrendPoint { date: "Jun 5".to_string(), sales: 5640.0, orders: 79 },
        SalesTrendPoint { date: "Jun 12".to_string(), sales: 6480.0, orders: 90 },
    ],
    revenue_by_category: vec![
        CategoryRevenue { category: "Electronics".to_string(), revenue: 98_200.0, percentage: 39.5 },
        CategoryRevenue { category: "Clothing".to_string(), revenue: 61_400.0, percentage: 24.7 },
        CategoryRevenue { category: "Home & Kitchen".to_string(), revenue: 43_900.0, percentage: 17.7 },
        CategoryRevenue { category: "Sports".to_string(), revenue: 27_300.0, percentage: 11.0 },
        CategoryRevenue { category: "Other".to_string(), revenue: 17_790.0, percentage: 7.1 },
    ],
    user_growth: vec![
        UserGrowthPoint { month: "Jan".to_string(), new_users: 210, active_users: 1850 },
        UserGrowthPoint { month: "Feb".to_string(), new_users: 245, active_users: 1990 },
        UserGrowthPoint { month: "Mar".to_string(), new_users: 302, active_users: 2210 },
        UserGrowthPoint { month: "Apr".to_string(), new_users: 288, active_users: 2370 },
        UserGrowthPoint { month: "May".to_string(), new_users: 351, active_users: 2640 },
        UserGrowthPoint { month: "Jun".to_string(), new_users: 330, active_users: 2890 },
    ],
    top_products: vec![
        TopProduct { id: "PRD-001".to_string(), name: "Wireless Headphones".to_string(), sales: 412, revenue: 53_548.0 },
        TopProduct { id: "PRD-002".to_string(), name: "Smart Watch Series 5".to_string(), sales: 167, revenue: 49_933.0 },
        TopProduct { id: "PRD-003".to_string(), name: "Espresso Machine".to_string(), sales: 74, revenue: 33_226.0 },
        TopProduct { id: "PRD-004".to_string(), name: "Mechanical Keyboard".to_string(), sales: 158, revenue: 25_122.0 },
        TopProduct { id: "PRD-005".to_string(), name: "Running Shoes".to_string(), sales: 231, revenue: 20_789.0 },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    fn has_duplicate_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> bool {
        let mut seen = std::collections::HashSet::new();
        ids.into_iter().any(|id| !seen.insert(id))
    }

    #[test]
    fn fixture_ids_are_unique() {
        assert!(!has_duplicate_ids(USERS.iter().map(|u| u.id.as_str())));
        assert!(!has_duplicate_ids(ORDERS.iter().map(|o| o.id.as_str())));
        assert!(!has_duplicate_ids(COUPONS.iter().map(|c| c.id.as_str())));
        assert!(!has_duplicate_ids(REPORTS.iter().map(|r| r.id.as_str())));
        assert!(!has_duplicate_ids(SEGMENTS.iter().map(|s| s.id.as_str())));
    }

    #[test]
    fn collections_are_non_empty() {
        assert!(!USERS.is_empty());
        assert!(!ORDERS.is_empty());
        assert!(!COUPONS.is_empty());
        assert!(!REPORTS.is_empty());
        assert!(!SEGMENTS.is_empty());
        assert!(!INSIGHTS.is_empty());
    }

    #[test]
    fn segment_counts_cover_every_user() {
        let total: u32 = SEGMENTS.iter().map(|s| s.user_count).sum();
        assert_eq!(total as usize, USERS.len());
    }

    #[test]
    fn coupon_usage_respects_limits() {
        for coupon in COUPONS.iter() {
            if let Some(limit) = coupon.usage_limit {
                assert!(coupon.used_count <= limit, "coupon {}", coupon.code);
            }
            assert!(coupon.validate().is_ok(), "coupon {}", coupon.code);
        }
    }

    #[test]
    fn order_totals_match_line_items_where_flat() {
        // Spot-check a single-line order: total equals the line total.
        let order = ORDERS.iter().find(|o| o.id == "ORD-2024-1002").unwrap();
        assert!((order.total - order.items[0].line_total()).abs() < 1e-9);
    }

    #[test]
    fn category_revenue_shares_sum_to_100() {
        let total: f64 = ANALYTICS.revenue_by_category.iter().map(|c| c.percentage).sum();
        assert!((total - 100.0).abs() < 0.01);
    }
}
