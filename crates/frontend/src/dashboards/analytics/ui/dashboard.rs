use crate::shared::components::charts::{AreaChart, BarChart, BarSeries, DonutChart};
use crate::shared::data::store::AppStore;
use crate::shared::date_utils::{format_money, format_thousands};
use leptos::prelude::*;

const CATEGORY_COLORS: [&str; 5] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"];

#[component]
#[allow(non_snake_case)]
pub fn AnalyticsDashboard() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");

    let sales_points = move || {
        store.analytics.with(|a| {
            a.sales_trend
                .iter()
                .map(|p| (p.date.clone(), p.sales))
                .collect::<Vec<_>>()
        })
    };

    let category_slices = move || {
        store.analytics.with(|a| {
            a.revenue_by_category
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    (
                        c.category.clone(),
                        c.revenue,
                        CATEGORY_COLORS[i % CATEGORY_COLORS.len()].to_string(),
                    )
                })
                .collect::<Vec<_>>()
        })
    };

    let growth = move || {
        store.analytics.with(|a| {
            (
                a.user_growth.iter().map(|p| p.month.clone()).collect::<Vec<_>>(),
                a.user_growth.iter().map(|p| f64::from(p.new_users)).collect::<Vec<_>>(),
                a.user_growth
                    .iter()
                    .map(|p| f64::from(p.active_users))
                    .collect::<Vec<_>>(),
            )
        })
    };

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Analytics"</h2>
                    <p class="header__subtitle">
                        "Sales, revenue and user growth at a glance"
                    </p>
                </div>
            </div>

            <div class="chart-grid">
                <div class="panel panel--wide">
                    <h3 class="panel__title">"Sales Trend"</h3>
                    {move || view! { <AreaChart points=sales_points() /> }}
                </div>

                <div class="panel">
                    <h3 class="panel__title">"Revenue by Category"</h3>
                    <div class="panel__body panel__body--centered">
                        {move || view! { <DonutChart slices=category_slices() /> }}
                        <div class="chart-legend chart-legend--stacked">
                            {move || {
                                store
                                    .analytics
                                    .with(|a| {
                                        a.revenue_by_category
                                            .iter()
                                            .enumerate()
                                            .map(|(i, c)| {
                                                view! {
                                                    <span class="chart-legend__item">
                                                        <span
                                                            class="chart-legend__swatch"
                                                            style=format!(
                                                                "background:{}",
                                                                CATEGORY_COLORS[i % CATEGORY_COLORS.len()],
                                                            )
                                                        ></span>
                                                        {format!(
                                                            "{} — {} ({:.1}%)",
                                                            c.category,
                                                            format_money(c.revenue),
                                                            c.percentage,
                                                        )}
                                                    </span>
                                                }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </div>
                    </div>
                </div>

                <div class="panel">
                    <h3 class="panel__title">"User Growth"</h3>
                    {move || {
                        let (labels, new_users, active_users) = growth();
                        view! {
                            <BarChart
                                labels=labels
                                series=vec![
                                    BarSeries {
                                        name: "New users",
                                        color: "#3B82F6",
                                        values: new_users,
                                    },
                                    BarSeries {
                                        name: "Active users",
                                        color: "#10B981",
                                        values: active_users,
                                    },
                                ]
                            />
                        }
                    }}
                </div>

                <div class="panel">
                    <h3 class="panel__title">"Top Products"</h3>
                    <div class="top-products">
                        {move || {
                            store
                                .analytics
                                .with(|a| {
                                    a.top_products
                                        .iter()
                                        .enumerate()
                                        .map(|(i, p)| {
                                            view! {
                                                <div class="top-products__row">
                                                    <span class="top-products__rank">
                                                        {format!("#{}", i + 1)}
                                                    </span>
                                                    <div class="top-products__name">
                                                        <p>{p.name.clone()}</p>
                                                        <p class="card__line card__line--muted">
                                                            {format!(
                                                                "{} sales",
                                                                format_thousands(u64::from(p.sales)),
                                                            )}
                                                        </p>
                                                    </div>
                                                    <span class="card__amount">
                                                        {format_money(p.revenue)}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
