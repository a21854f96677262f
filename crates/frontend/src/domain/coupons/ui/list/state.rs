use contracts::enums::coupon_status::CouponStatus;
use contracts::enums::coupon_type::CouponType;
use contracts::shared::list_filter::FacetSelection;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct CouponsListState {
    pub search: String,
    pub status: FacetSelection<CouponStatus>,
    pub coupon_type: FacetSelection<CouponType>,
}

pub fn create_state() -> RwSignal<CouponsListState> {
    RwSignal::new(CouponsListState::default())
}
