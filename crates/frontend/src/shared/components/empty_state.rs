use crate::shared::icons::icon;
use leptos::prelude::*;

/// Rendered when a filtered list comes back empty: explanatory message
/// plus a "clear filters" action.
#[component]
pub fn EmptyState(
    /// Icon name from the icon() helper.
    icon_name: &'static str,
    /// Headline, e.g. "No orders found".
    title: &'static str,
    /// Called when the user clicks "Clear Filters".
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(icon_name)}</div>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__message">
                "Try adjusting your search or filter criteria"
            </p>
            <button
                class="button button--secondary"
                on:click=move |_| on_clear.run(())
            >
                "Clear Filters"
            </button>
        </div>
    }
}
