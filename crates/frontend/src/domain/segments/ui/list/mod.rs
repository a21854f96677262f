pub mod state;

use self::state::create_state;
use crate::domain::segments::ui::details::SegmentCreate;
use crate::shared::components::charts::{BarChart, BarSeries, DonutChart};
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::store::AppStore;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::segment::Segment;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_filter::ListFilter;
use leptos::prelude::*;

/// Demographic fixture series for the lower charts; like the rest of
/// the page these are sample numbers, not computed aggregates.
fn location_series() -> (Vec<String>, Vec<f64>) {
    let data = [
        ("New York", 1250.0),
        ("California", 980.0),
        ("Texas", 750.0),
        ("Florida", 620.0),
        ("Illinois", 450.0),
    ];
    (
        data.iter().map(|(name, _)| name.to_string()).collect(),
        data.iter().map(|(_, users)| *users).collect(),
    )
}

fn behavior_series() -> (Vec<String>, Vec<f64>) {
    let data = [
        ("High Spenders", 234.0),
        ("Frequent Buyers", 567.0),
        ("Mobile Users", 890.0),
        ("Email Subscribers", 1200.0),
        ("Social Media", 678.0),
    ];
    (
        data.iter().map(|(name, _)| name.to_string()).collect(),
        data.iter().map(|(_, users)| *users).collect(),
    )
}

#[component]
#[allow(non_snake_case)]
pub fn SegmentsList() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_create, set_show_create) = signal(false);

    let filtered_segments = move || {
        let s = state.get();
        store.segments.with(|segments| {
            ListFilter::with_search(&s.search).apply(segments)
        })
    };

    let segment_count = move || store.segments.with(|segments| segments.len()) as f64;
    let segmented_users = move || {
        store
            .segments
            .with(|segments| segments.iter().map(|s| u64::from(s.user_count)).sum::<u64>())
            as f64
    };
    let largest_share = move || {
        store.segments.with(|segments| {
            let total: u32 = segments.iter().map(|s| s.user_count).sum();
            segments
                .iter()
                .map(|s| s.share_percent(total))
                .fold(0.0, f64::max)
        })
    };

    let donut_slices = move || {
        store.segments.with(|segments| {
            segments
                .iter()
                .map(|s| (s.name.clone(), f64::from(s.user_count), s.color.clone()))
                .collect::<Vec<_>>()
        })
    };

    let clear_filters = move || {
        state.set(Default::default());
    };

    let run = move |result: Result<(), String>| match result {
        Ok(()) => set_error.set(None),
        Err(e) => set_error.set(Some(e)),
    };

    let (location_labels, location_values) = location_series();
    let (behavior_labels, behavior_values) = behavior_series();

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"User Segmentation"</h2>
                    <p class="header__subtitle">
                        "Analyze and target specific customer groups for better engagement"
                    </p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                        "Create Segment"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Segments".to_string()
                    icon_name="pie-chart".to_string()
                    value=Signal::derive(move || Some(segment_count()))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Segmented Users".to_string()
                    icon_name="users".to_string()
                    value=Signal::derive(move || Some(segmented_users()))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Largest Share".to_string()
                    icon_name="target".to_string()
                    value=Signal::derive(move || Some(largest_share()))
                    format=ValueFormat::Percent { decimals: 1 }
                    status=Signal::derive(|| IndicatorStatus::Good)
                    change_percent=Signal::derive(|| None)
                />
            </div>

            <div class="chart-grid">
                <div class="panel">
                    <h3 class="panel__title">"Segment Distribution"</h3>
                    <div class="panel__body panel__body--centered">
                        {move || view! { <DonutChart slices=donut_slices() /> }}
                        <div class="chart-legend chart-legend--stacked">
                            {move || {
                                store
                                    .segments
                                    .with(|segments| {
                                        segments
                                            .iter()
                                            .map(|s| {
                                                view! {
                                                    <span class="chart-legend__item">
                                                        <span
                                                            class="chart-legend__swatch"
                                                            style=format!("background:{}", s.color)
                                                        ></span>
                                                        {format!("{} ({})", s.name, s.user_count)}
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
                    <h3 class="panel__title">"Users by Location"</h3>
                    <BarChart
                        labels=location_labels
                        series=vec![BarSeries {
                            name: "Users",
                            color: "#3B82F6",
                            values: location_values,
                        }]
                    />
                </div>

                <div class="panel">
                    <h3 class="panel__title">"Behavioral Groups"</h3>
                    <BarChart
                        labels=behavior_labels
                        series=vec![BarSeries {
                            name: "Users",
                            color: "#10B981",
                            values: behavior_values,
                        }]
                    />
                </div>
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.get().search)
                    on_change=Callback::new(move |term: String| {
                        state.update(|s| s.search = term);
                    })
                    placeholder="Search segments by name or description..."
                />
            </div>

            <div class="card-list">
                {move || {
                    filtered_segments()
                        .into_iter()
                        .map(|segment: Segment| {
                            let id_for_delete = segment.id.clone();
                            view! {
                                <div class="card card--row">
                                    <div class="card__main">
                                        <div class="card__title-row">
                                            <span
                                                class="color-chip"
                                                style=format!("background:{}", segment.color)
                                            ></span>
                                            <h3 class="card__title">{segment.name.clone()}</h3>
                                        </div>
                                        <p class="card__line">{segment.description.clone()}</p>
                                        <p class="card__line card__line--muted card__line--mono">
                                            {segment.criteria.clone()}
                                        </p>
                                    </div>
                                    <div class="card__side">
                                        <p class="card__amount">
                                            {format!("{} users", segment.user_count)}
                                        </p>
                                        <p class="card__line card__line--muted">
                                            "Created "
                                            {format_date(segment.created_at)}
                                        </p>
                                    </div>
                                    <div class="card__actions">
                                        <button
                                            class="button button--icon button--danger"
                                            title="Delete segment"
                                            on:click=move |_| {
                                                run(store.remove_segment(&id_for_delete));
                                            }
                                        >
                                            {icon("trash")}
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                if filtered_segments().is_empty() {
                    view! {
                        <EmptyState
                            icon_name="pie-chart"
                            title="No segments found"
                            on_clear=Callback::new(move |_| clear_filters())
                        />
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if show_create.get() {
                    view! {
                        <SegmentCreate
                            on_saved=Callback::new(move |_| {
                                set_show_create.set(false);
                                set_error.set(None);
                            })
                            on_cancel=Callback::new(move |_| set_show_create.set(false))
                        />
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
