use contracts::shared::list_filter::{FacetValue, FACET_ALL};
use leptos::prelude::*;

/// Dropdown for one categorical facet. Options are the closed enum's
/// values plus the leading `"all"` sentinel; the raw code is emitted on
/// change and the page parses it into a typed `FacetSelection`.
#[component]
pub fn FacetSelect(
    /// Label for the `"all"` row, e.g. "All Status".
    all_label: &'static str,
    /// `(code, display name)` pairs from `FacetValue::all()`.
    options: Vec<(&'static str, &'static str)>,
    /// Currently selected code.
    #[prop(into)]
    value: Signal<&'static str>,
    /// Called with the newly selected code.
    #[prop(into)]
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="facet-select"
            prop:value=move || value.get().to_string()
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        >
            <option value=FACET_ALL>{all_label}</option>
            {options
                .into_iter()
                .map(|(code, label)| {
                    view! { <option value=code>{label}</option> }
                })
                .collect_view()}
        </select>
    }
}

/// Convenience: the `(code, display name)` option rows for an enum.
pub fn facet_options<V: FacetValue>() -> Vec<(&'static str, &'static str)> {
    V::all()
        .into_iter()
        .map(|value| (value.code(), value.display_name()))
        .collect()
}
