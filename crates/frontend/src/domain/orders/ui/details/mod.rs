use crate::shared::components::modal::Modal;
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::icons::icon;
use contracts::domain::order::Order;
use contracts::shared::list_filter::FacetValue;
use leptos::prelude::*;

/// Read-only order details dialog: customer, status, shipping address
/// and the line items with their totals.
#[component]
#[allow(non_snake_case)]
pub fn OrderDetails(order: Order, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Order Details - {}", order.id);

    let items = order
        .items
        .iter()
        .map(|item| {
            view! {
                <div class="order-item">
                    <span class="order-item__name">{item.product_name.clone()}</span>
                    <span class="order-item__math">
                        {format!(
                            "{} × {} = {}",
                            item.quantity,
                            format_money(item.price),
                            format_money(item.line_total()),
                        )}
                    </span>
                </div>
            }
        })
        .collect_view();

    let address_lines = order
        .shipping_address
        .formatted()
        .lines()
        .map(|line| view! { <div>{line.to_string()}</div> })
        .collect_view();

    view! {
        <Modal title=title on_close=on_close>
            <div class="order-details">
                <div class="order-details__grid">
                    <section>
                        <h4>"Customer Information"</h4>
                        <p>{order.user_name.clone()}</p>
                        <p class="card__line--muted">{order.user_email.clone()}</p>
                        <p class="card__line--muted">{format_datetime(order.created_at)}</p>
                    </section>
                    <section>
                        <h4>"Order Status"</h4>
                        <p>{order.status.display_name()}</p>
                        <p class="card__line--muted">{order.payment_method.clone()}</p>
                        {order
                            .tracking_number
                            .clone()
                            .map(|trk| {
                                view! {
                                    <p class="card__line--accent">
                                        {icon("truck")}
                                        {trk}
                                    </p>
                                }
                            })}
                    </section>
                </div>

                <section>
                    <h4>"Shipping Address"</h4>
                    <div class="order-details__address">{address_lines}</div>
                </section>

                <section>
                    <h4>"Order Items"</h4>
                    <div class="order-details__items">{items}</div>
                    <div class="order-details__total">
                        <span>"Total:"</span>
                        <span>{format_money(order.total)}</span>
                    </div>
                </section>
            </div>
        </Modal>
    }
}
