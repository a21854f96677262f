pub mod state;

use self::state::create_state;
use crate::domain::orders::ui::details::OrderDetails;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::facet_select::{facet_options, FacetSelect};
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::store::AppStore;
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::order::Order;
use contracts::enums::order_status::OrderStatus;
use contracts::shared::list_filter::{count_by, FacetSelection, FacetValue, ListFilter};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn status_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => "badge badge--success",
        OrderStatus::Shipped => "badge badge--info",
        OrderStatus::Processing => "badge badge--warning",
        OrderStatus::Pending => "badge badge--neutral",
        OrderStatus::Cancelled => "badge badge--error",
        OrderStatus::Refunded => "badge badge--purple",
    }
}

fn status_icon(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => "check-circle",
        OrderStatus::Shipped => "truck",
        OrderStatus::Processing => "package",
        OrderStatus::Pending => "clock",
        OrderStatus::Cancelled | OrderStatus::Refunded => "x-circle",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OrdersList() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let details_order: RwSignal<Option<Order>> = RwSignal::new(None);

    let filtered_orders = move || {
        let s = state.get();
        store.orders.with(|orders| {
            ListFilter::with_search(&s.search)
                .facet(s.status, |order: &Order| order.status)
                .apply(orders)
        })
    };

    // Stat cards read derived counts over the unfiltered collection, so
    // they stay put while the user filters.
    let status_counts = move || store.orders.with(|orders| count_by(orders, |o| o.status));
    let count_with = move |status: OrderStatus| {
        status_counts()
            .iter()
            .find(|(observed, _)| *observed == status)
            .map(|(_, n)| *n)
            .unwrap_or(0) as f64
    };
    let total_orders = move || store.orders.with(|orders| orders.len()) as f64;

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
                    <h2>"Orders"</h2>
                    <p class="header__subtitle">"Manage and track all customer orders"</p>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Total Orders".to_string()
                    icon_name="package".to_string()
                    value=Signal::derive(move || Some(total_orders()))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Pending".to_string()
                    icon_name="clock".to_string()
                    value=Signal::derive(move || Some(count_with(OrderStatus::Pending)))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Warning)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Shipped".to_string()
                    icon_name="truck".to_string()
                    value=Signal::derive(move || Some(count_with(OrderStatus::Shipped)))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Delivered".to_string()
                    icon_name="check-circle".to_string()
                    value=Signal::derive(move || Some(count_with(OrderStatus::Delivered)))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                    change_percent=Signal::derive(|| None)
                />
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.get().search)
                    on_change=Callback::new(move |term: String| {
                        state.update(|s| s.search = term);
                    })
                    placeholder="Search orders by ID, customer name, or email..."
                />
                <FacetSelect
                    all_label="All Status"
                    options={facet_options::<OrderStatus>()}
                    value=Signal::derive(move || state.get().status.code())
                    on_change=Callback::new(move |code: String| {
                        state.update(|s| s.status = FacetSelection::parse(&code));
                    })
                />
            </div>

            <div class="card-list">
                {move || {
                    filtered_orders()
                        .into_iter()
                        .map(|order| {
                            let id_for_status = order.id.clone();
                            let id_for_cancel = order.id.clone();
                            let order_for_details = order.clone();
                            let cancellable = order.status.is_cancellable();
                            view! {
                                <div class="card card--row">
                                    <div class="card__main">
                                        <div class="card__title-row">
                                            <h3 class="card__title">{order.id.clone()}</h3>
                                            <span class=status_badge_class(order.status)>
                                                {icon(status_icon(order.status))}
                                                {order.status.display_name()}
                                            </span>
                                        </div>
                                        <p class="card__line">
                                            {order.user_name.clone()}
                                            " • "
                                            {order.user_email.clone()}
                                        </p>
                                        <p class="card__line card__line--muted">
                                            {format_datetime(order.created_at)}
                                        </p>
                                    </div>
                                    <div class="card__side">
                                        <p class="card__amount">{format_money(order.total)}</p>
                                        <p class="card__line card__line--muted">
                                            {format!(
                                                "{} item{}",
                                                order.item_count(),
                                                if order.item_count() == 1 { "" } else { "s" },
                                            )}
                                        </p>
                                        {order
                                            .tracking_number
                                            .clone()
                                            .map(|trk| {
                                                view! {
                                                    <p class="card__line card__line--accent">{trk}</p>
                                                }
                                            })}
                                    </div>
                                    <div class="card__actions">
                                        <button
                                            class="button button--icon"
                                            title="View details"
                                            on:click=move |_| {
                                                details_order.set(Some(order_for_details.clone()));
                                            }
                                        >
                                            {icon("eye")}
                                        </button>
                                        <select
                                            class="facet-select facet-select--compact"
                                            title="Update status"
                                            prop:value=order.status.code().to_string()
                                            on:change=move |ev| {
                                                let code = event_target_value(&ev);
                                                if let Some(status) = OrderStatus::from_code(&code) {
                                                    run(store.set_order_status(&id_for_status, status));
                                                }
                                            }
                                        >
                                            {OrderStatus::all()
                                                .into_iter()
                                                .map(|status| {
                                                    view! {
                                                        <option value=status.code()>
                                                            {status.display_name()}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Cancel order"
                                            disabled=!cancellable
                                            on:click=move |_| {
                                                run(store.cancel_order(&id_for_cancel));
                                            }
                                        >
                                            {icon("x-circle")}
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                if filtered_orders().is_empty() {
                    view! {
                        <EmptyState
                            icon_name="package"
                            title="No orders found"
                            on_clear=Callback::new(move |_| clear_filters())
                        />
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                details_order
                    .get()
                    .map(|order| {
                        view! {
                            <OrderDetails
                                order=order
                                on_close=Callback::new(move |_| details_order.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
