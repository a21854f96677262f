use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct SegmentsListState {
    pub search: String,
}

pub fn create_state() -> RwSignal<SegmentsListState> {
    RwSignal::new(SegmentsListState::default())
}
