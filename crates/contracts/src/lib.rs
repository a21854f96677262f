//! Shared contracts for the commerce admin dashboard: domain entity
//! snapshots, the closed enumerations behind every facet, dashboard
//! data shapes, and the generic list-filter engine the list pages run
//! on. Pure data and logic; no UI dependencies.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
