/// Shared helpers for list pages (sorting, search input)
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Trait for row types that support field sorting.
pub trait Sortable {
    /// Compare two rows by the named field. Unknown field names compare
    /// equal, so a stable sort leaves the list in its original order.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the named field (stable).
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Search input with debounce and a clear button. Any non-empty term
/// filters; fixture collections are small enough that there is no
/// minimum length.
#[component]
pub fn SearchInput(
    /// Current committed filter value.
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked with the debounced value.
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local state for the input, ahead of the debounce.
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">
                {crate::shared::icons::icon("search")}
            </span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button
                            class="search-input__clear"
                            title="Clear"
                            on:click=clear_filter
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        spent: u32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                "spent" => self.spent.cmp(&other.spent),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "b", spent: 30 },
            Row { name: "a", spent: 10 },
            Row { name: "c", spent: 20 },
        ]
    }

    #[test]
    fn sorts_by_field_in_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "spent", true);
        let spent: Vec<u32> = items.iter().map(|r| r.spent).collect();
        assert_eq!(spent, vec![10, 20, 30]);

        sort_list(&mut items, "name", false);
        let names: Vec<&str> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn unknown_field_keeps_original_order() {
        let mut items = rows();
        sort_list(&mut items, "nonexistent", true);
        let names: Vec<&str> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
