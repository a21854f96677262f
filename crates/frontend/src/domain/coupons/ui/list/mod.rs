pub mod state;

use self::state::create_state;
use crate::domain::coupons::ui::details::CouponCreate;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::facet_select::{facet_options, FacetSelect};
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::store::AppStore;
use crate::shared::date_utils::{format_date, format_thousands};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::coupon::Coupon;
use contracts::enums::coupon_status::CouponStatus;
use contracts::enums::coupon_type::CouponType;
use contracts::shared::list_filter::{count_matching, FacetSelection, FacetValue, ListFilter};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn status_badge_class(status: CouponStatus) -> &'static str {
    match status {
        CouponStatus::Active => "badge badge--success",
        CouponStatus::Inactive => "badge badge--neutral",
        CouponStatus::Expired => "badge badge--error",
    }
}

fn type_icon(coupon_type: CouponType) -> &'static str {
    match coupon_type {
        CouponType::Percentage => "percent",
        CouponType::Fixed => "dollar-sign",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CouponsList() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_create, set_show_create) = signal(false);

    let filtered_coupons = move || {
        let s = state.get();
        store.coupons.with(|coupons| {
            ListFilter::with_search(&s.search)
                .facet(s.status, |coupon: &Coupon| coupon.status)
                .facet(s.coupon_type, |coupon: &Coupon| coupon.coupon_type)
                .apply(coupons)
        })
    };

    let total_coupons = move || store.coupons.with(|coupons| coupons.len()) as f64;
    let count_with = move |status: CouponStatus| {
        store
            .coupons
            .with(|coupons| count_matching(coupons, |c| c.status == status)) as f64
    };
    let total_redemptions = move || {
        store
            .coupons
            .with(|coupons| coupons.iter().map(|c| u64::from(c.used_count)).sum::<u64>())
            as f64
    };

    let clear_filters = move || {
        state.set(Default::default());
    };

    let run = move |result: Result<(), String>| match result {
        Ok(()) => set_error.set(None),
        Err(e) => set_error.set(Some(e)),
    };

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Coupons"</h2>
                    <p class="header__subtitle">"Create and manage discount codes"</p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                        "New Coupon"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Total Coupons".to_string()
                    icon_name="tag".to_string()
                    value=Signal::derive(move || Some(total_coupons()))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Active".to_string()
                    icon_name="check-circle".to_string()
                    value=Signal::derive(move || Some(count_with(CouponStatus::Active)))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Expired".to_string()
                    icon_name="x-circle".to_string()
                    value=Signal::derive(move || Some(count_with(CouponStatus::Expired)))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Bad)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Total Redemptions".to_string()
                    icon_name="zap".to_string()
                    value=Signal::derive(move || Some(total_redemptions()))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.get().search)
                    on_change=Callback::new(move |term: String| {
                        state.update(|s| s.search = term);
                    })
                    placeholder="Search coupons by code or description..."
                />
                <FacetSelect
                    all_label="All Status"
                    options={facet_options::<CouponStatus>()}
                    value=Signal::derive(move || state.get().status.code())
                    on_change=Callback::new(move |code: String| {
                        state.update(|s| s.status = FacetSelection::parse(&code));
                    })
                />
                <FacetSelect
                    all_label="All Types"
                    options={facet_options::<CouponType>()}
                    value=Signal::derive(move || state.get().coupon_type.code())
                    on_change=Callback::new(move |code: String| {
                        state.update(|s| s.coupon_type = FacetSelection::parse(&code));
                    })
                />
            </div>

            <div class="card-list">
                {move || {
                    filtered_coupons()
                        .into_iter()
                        .map(|coupon| {
                            let id_for_toggle = coupon.id.clone();
                            let id_for_delete = coupon.id.clone();
                            let usage = coupon.usage_percent();
                            let toggle_title = if coupon.status == CouponStatus::Active {
                                "Deactivate"
                            } else {
                                "Activate"
                            };
                            view! {
                                <div class="card card--row">
                                    <div class="card__main">
                                        <div class="card__title-row">
                                            {icon(type_icon(coupon.coupon_type))}
                                            <h3 class="card__title card__title--mono">
                                                {coupon.code.clone()}
                                            </h3>
                                            <span class=status_badge_class(coupon.status)>
                                                {coupon.status.display_name()}
                                            </span>
                                        </div>
                                        <p class="card__line">{coupon.description.clone()}</p>
                                        <p class="card__line card__line--muted">
                                            {icon("calendar")}
                                            "Expires "
                                            {format_date(coupon.expiration_date)}
                                        </p>
                                    </div>
                                    <div class="card__side">
                                        <p class="card__amount">{coupon.formatted_value()}</p>
                                        <p class="card__line card__line--muted">
                                            {match coupon.usage_limit {
                                                Some(limit) => {
                                                    format!(
                                                        "{} / {} used",
                                                        format_thousands(u64::from(coupon.used_count)),
                                                        format_thousands(u64::from(limit)),
                                                    )
                                                }
                                                None => {
                                                    format!(
                                                        "{} used",
                                                        format_thousands(u64::from(coupon.used_count)),
                                                    )
                                                }
                                            }}
                                        </p>
                                        {usage
                                            .map(|pct| {
                                                view! {
                                                    <div class="usage-bar">
                                                        <div
                                                            class="usage-bar__fill"
                                                            style=format!("width:{pct:.0}%")
                                                        ></div>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                    <div class="card__actions">
                                        <button
                                            class="button button--icon"
                                            title=toggle_title
                                            disabled=coupon.status == CouponStatus::Expired
                                            on:click=move |_| {
                                                run(store.toggle_coupon_status(&id_for_toggle));
                                            }
                                        >
                                            {icon("refresh")}
                                        </button>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Delete coupon"
                                            on:click=move |_| {
                                                run(store.remove_coupon(&id_for_delete));
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
                if filtered_coupons().is_empty() {
                    view! {
                        <EmptyState
                            icon_name="tag"
                            title="No coupons found"
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
                        <CouponCreate
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
