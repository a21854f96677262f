pub mod state;

use self::state::create_state;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::facet_select::{facet_options, FacetSelect};
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::store::AppStore;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::report::Report;
use contracts::enums::report_status::ReportStatus;
use contracts::enums::report_type::ReportType;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_filter::{count_matching, FacetSelection, FacetValue, ListFilter};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

fn status_badge_class(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Completed => "badge badge--success",
        ReportStatus::Generating => "badge badge--warning",
        ReportStatus::Failed => "badge badge--error",
    }
}

fn type_icon(report_type: ReportType) -> &'static str {
    match report_type {
        ReportType::Sales => "trending-up",
        ReportType::Customers => "users",
        ReportType::Inventory => "shopping-cart",
        ReportType::Financial => "dollar-sign",
        ReportType::Marketing => "bar-chart",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ReportsList() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);

    let filtered_reports = move || {
        let s = state.get();
        store.reports.with(|reports| {
            ListFilter::new()
                .facet(s.report_type, |report: &Report| report.report_type)
                .apply(reports)
        })
    };

    let total_reports = move || store.reports.with(|reports| reports.len()) as f64;
    let count_with = move |status: ReportStatus| {
        store
            .reports
            .with(|reports| count_matching(reports, |r| r.status == status)) as f64
    };

    let clear_filters = move || {
        state.set(Default::default());
    };

    // Simulated regeneration: flip to Generating, then complete after a
    // short delay and stamp the completion time.
    let regenerate = move |id: String| {
        match store.mark_report_generating(&id) {
            Ok(()) => set_error.set(None),
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        }
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(1_200).await;
            if let Err(e) = store.mark_report_completed(&id, Utc::now()) {
                log::error!("report completion failed: {e}");
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Reports"</h2>
                    <p class="header__subtitle">
                        "Generate and manage business reports and analytics"
                    </p>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Total Reports".to_string()
                    icon_name="file-text".to_string()
                    value=Signal::derive(move || Some(total_reports()))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Completed".to_string()
                    icon_name="check-circle".to_string()
                    value=Signal::derive(move || Some(count_with(ReportStatus::Completed)))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Generating".to_string()
                    icon_name="clock".to_string()
                    value=Signal::derive(move || Some(count_with(ReportStatus::Generating)))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Warning)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Failed".to_string()
                    icon_name="alert-circle".to_string()
                    value=Signal::derive(move || Some(count_with(ReportStatus::Failed)))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Bad)
                    change_percent=Signal::derive(|| None)
                />
            </div>

            <div class="filter-bar">
                <FacetSelect
                    all_label="All Types"
                    options={facet_options::<ReportType>()}
                    value=Signal::derive(move || state.get().report_type.code())
                    on_change=Callback::new(move |code: String| {
                        state.update(|s| s.report_type = FacetSelection::parse(&code));
                    })
                />
            </div>

            <div class="card-list">
                {move || {
                    filtered_reports()
                        .into_iter()
                        .map(|report| {
                            let id_for_regenerate = report.id.clone();
                            let generating = report.status == ReportStatus::Generating;
                            let metrics = report
                                .metrics
                                .iter()
                                .map(|metric| {
                                    view! {
                                        <span class="chip">{metric.clone()}</span>
                                    }
                                })
                                .collect_view();
                            view! {
                                <div class="card card--row">
                                    <div class="card__main">
                                        <div class="card__title-row">
                                            {icon(type_icon(report.report_type))}
                                            <h3 class="card__title">{report.name.clone()}</h3>
                                            <span class=status_badge_class(report.status)>
                                                {if generating {
                                                    view! { <Spinner /> }.into_any()
                                                } else {
                                                    view! { <></> }.into_any()
                                                }}
                                                {report.status.display_name()}
                                            </span>
                                        </div>
                                        <p class="card__line">{report.description.clone()}</p>
                                        <div class="chip-row">{metrics}</div>
                                    </div>
                                    <div class="card__side">
                                        <p class="card__line">
                                            {report.cadence.clone()}
                                            " • "
                                            {report.file_format.clone()}
                                            " • "
                                            {report.size_label.clone()}
                                        </p>
                                        <p class="card__line card__line--muted">
                                            "Last generated "
                                            {format_datetime(report.last_generated)}
                                        </p>
                                    </div>
                                    <div class="card__actions">
                                        <button
                                            class="button button--icon"
                                            title="Regenerate report"
                                            disabled=generating
                                            on:click=move |_| regenerate(id_for_regenerate.clone())
                                        >
                                            {icon("refresh")}
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                if filtered_reports().is_empty() {
                    view! {
                        <EmptyState
                            icon_name="file-text"
                            title="No reports found"
                            on_clear=Callback::new(move |_| clear_filters())
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
