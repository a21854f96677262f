pub mod charts;
pub mod empty_state;
pub mod facet_select;
pub mod modal;
pub mod stat_card;
