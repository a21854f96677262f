pub mod global_context;
pub mod header;
pub mod left;

use crate::dashboards::analytics::ui::AnalyticsDashboard;
use crate::dashboards::overview::ui::OverviewDashboard;
use crate::domain::coupons::ui::list::CouponsList;
use crate::domain::orders::ui::list::OrdersList;
use crate::domain::segments::ui::list::SegmentsList;
use crate::domain::users::ui::list::UsersList;
use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::layout::header::TopHeader;
use crate::layout::left::sidebar::Sidebar;
use crate::system::reports::ui::list::ReportsList;
use crate::system::settings::ui::SettingsPage;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |     (active page)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div
                    class="app-sidebar"
                    class:app-sidebar--collapsed={move || !ctx.left_open.get()}
                >
                    <Sidebar />
                </div>

                <div class="app-main">
                    {move || match ctx.active.get() {
                        PageKey::Overview => view! { <OverviewDashboard /> }.into_any(),
                        PageKey::Analytics => view! { <AnalyticsDashboard /> }.into_any(),
                        PageKey::Orders => view! { <OrdersList /> }.into_any(),
                        PageKey::Coupons => view! { <CouponsList /> }.into_any(),
                        PageKey::Users => view! { <UsersList /> }.into_any(),
                        PageKey::Segmentation => view! { <SegmentsList /> }.into_any(),
                        PageKey::Reports => view! { <ReportsList /> }.into_any(),
                        PageKey::Settings => view! { <SettingsPage /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
