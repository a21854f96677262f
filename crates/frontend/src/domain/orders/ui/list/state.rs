use contracts::enums::order_status::OrderStatus;
use contracts::shared::list_filter::FacetSelection;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct OrdersListState {
    pub search: String,
    pub status: FacetSelection<OrderStatus>,
}

pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}
