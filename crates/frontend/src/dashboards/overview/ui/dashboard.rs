use crate::shared::components::charts::Sparkline;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::store::AppStore;
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::icons::icon;
use contracts::enums::insight::{InsightImpact, InsightType};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_filter::FacetValue;
use leptos::prelude::*;

fn insight_icon(insight_type: InsightType) -> &'static str {
    match insight_type {
        InsightType::Recommendation => "zap",
        InsightType::Alert => "alert-circle",
        InsightType::Prediction => "trending-up",
        InsightType::Optimization => "target",
    }
}

fn impact_badge_class(impact: InsightImpact) -> &'static str {
    match impact {
        InsightImpact::High => "badge badge--error",
        InsightImpact::Medium => "badge badge--warning",
        InsightImpact::Low => "badge badge--neutral",
    }
}

/// Weekly shapes for the stat-card sparklines. Display garnish only;
/// the headline numbers come from the store.
const ORDERS_TREND: [f64; 8] = [61.0, 69.0, 64.0, 75.0, 82.0, 79.0, 90.0, 94.0];
const USERS_TREND: [f64; 8] = [210.0, 245.0, 302.0, 288.0, 351.0, 330.0, 342.0, 361.0];
const REVENUE_TREND: [f64; 8] = [4200.0, 4850.0, 4530.0, 5320.0, 5910.0, 5640.0, 6480.0, 6710.0];
const REFUNDS_TREND: [f64; 8] = [180.0, 140.0, 165.0, 120.0, 95.0, 110.0, 88.0, 92.0];

#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");

    let stats = move || store.stats.get();

    let recent_orders = move || {
        store.orders.with(|orders| {
            let mut sorted: Vec<_> = orders.clone();
            sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            sorted.truncate(3);
            sorted
        })
    };

    let insights = move || store.insights.with(|insights| insights.iter().take(4).cloned().collect::<Vec<_>>());

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Dashboard"</h2>
                    <p class="header__subtitle">
                        "Welcome back! Here's what's happening with your store."
                    </p>
                </div>
            </div>

            <div class="stat-grid">
                <div class="stat-cell">
                    <StatCard
                        label="Total Orders".to_string()
                        icon_name="package".to_string()
                        value=Signal::derive(move || Some(f64::from(stats().total_orders)))
                        format=ValueFormat::Integer
                        status=Signal::derive(|| IndicatorStatus::Neutral)
                        change_percent=Signal::derive(move || Some(stats().orders_growth))
                    />
                    <Sparkline values=ORDERS_TREND.to_vec() />
                </div>
                <div class="stat-cell">
                    <StatCard
                        label="Total Users".to_string()
                        icon_name="users".to_string()
                        value=Signal::derive(move || Some(f64::from(stats().total_users)))
                        format=ValueFormat::Integer
                        status=Signal::derive(|| IndicatorStatus::Neutral)
                        change_percent=Signal::derive(move || Some(stats().users_growth))
                    />
                    <Sparkline values=USERS_TREND.to_vec() />
                </div>
                <div class="stat-cell">
                    <StatCard
                        label="Total Revenue".to_string()
                        icon_name="dollar-sign".to_string()
                        value=Signal::derive(move || Some(stats().total_revenue))
                        format=ValueFormat::Money { currency: "$".to_string() }
                        status=Signal::derive(|| IndicatorStatus::Good)
                        change_percent=Signal::derive(move || Some(stats().revenue_growth))
                    />
                    <Sparkline values=REVENUE_TREND.to_vec() color="#10B981" />
                </div>
                <div class="stat-cell">
                    <StatCard
                        label="Total Refunds".to_string()
                        icon_name="x-circle".to_string()
                        value=Signal::derive(move || Some(stats().total_refunds))
                        format=ValueFormat::Money { currency: "$".to_string() }
                        status=Signal::derive(|| IndicatorStatus::Warning)
                        change_percent=Signal::derive(move || Some(stats().refunds_growth))
                    />
                    <Sparkline values=REFUNDS_TREND.to_vec() color="#EF4444" />
                </div>
            </div>

            <div class="panel-grid">
                <div class="panel">
                    <h3 class="panel__title">
                        {icon("brain")}
                        "AI Insights"
                    </h3>
                    <div class="insight-list">
                        {move || {
                            insights()
                                .into_iter()
                                .map(|insight| {
                                    view! {
                                        <div class="insight">
                                            <div class="insight__icon">
                                                {icon(insight_icon(insight.insight_type))}
                                            </div>
                                            <div class="insight__body">
                                                <div class="insight__title-row">
                                                    <h4 class="insight__title">
                                                        {insight.title.clone()}
                                                    </h4>
                                                    <span class=impact_badge_class(insight.impact)>
                                                        {insight.impact.display_name()}
                                                    </span>
                                                </div>
                                                <p class="insight__description">
                                                    {insight.description.clone()}
                                                </p>
                                                <p class="card__line card__line--muted">
                                                    {insight.category.display_name()}
                                                    " • "
                                                    {format_datetime(insight.created_at)}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="panel">
                    <h3 class="panel__title">
                        {icon("clock")}
                        "Recent Orders"
                    </h3>
                    <div class="recent-orders">
                        {move || {
                            recent_orders()
                                .into_iter()
                                .map(|order| {
                                    view! {
                                        <div class="recent-orders__row">
                                            <div>
                                                <p class="card__title--mono">{order.id.clone()}</p>
                                                <p class="card__line card__line--muted">
                                                    {order.user_name.clone()}
                                                </p>
                                            </div>
                                            <div class="recent-orders__right">
                                                <p class="card__amount">
                                                    {format_money(order.total)}
                                                </p>
                                                <p class="card__line card__line--muted">
                                                    {order.status.display_name()}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
