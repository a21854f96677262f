use contracts::enums::user_role::UserRole;
use contracts::enums::user_segment::UserSegment;
use contracts::enums::user_status::UserStatus;
use contracts::shared::list_filter::FacetSelection;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct UsersListState {
    pub search: String,
    pub role: FacetSelection<UserRole>,
    pub status: FacetSelection<UserStatus>,
    pub segment: FacetSelection<UserSegment>,
    /// Empty = keep the collection's original order.
    pub sort_field: String,
    pub sort_descending: bool,
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}
