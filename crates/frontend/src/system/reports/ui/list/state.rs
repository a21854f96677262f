use contracts::enums::report_type::ReportType;
use contracts::shared::list_filter::FacetSelection;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ReportsListState {
    pub report_type: FacetSelection<ReportType>,
}

pub fn create_state() -> RwSignal<ReportsListState> {
    RwSignal::new(ReportsListState::default())
}
