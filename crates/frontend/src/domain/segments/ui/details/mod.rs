use crate::shared::components::modal::Modal;
use crate::shared::data::store::AppStore;
use chrono::Utc;
use contracts::domain::segment::Segment;
use leptos::prelude::*;
use thaw::*;

const SEGMENT_COLORS: [&str; 5] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"];

/// Create-segment dialog: name, description and a free-text criteria
/// string. New segments start with zero members.
#[component]
#[allow(non_snake_case)]
pub fn SegmentCreate(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");
    let (error, set_error) = signal::<Option<String>>(None);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let criteria = RwSignal::new(String::new());

    let handle_save = move |_| {
        let color = store.segments.with_untracked(|segments| {
            SEGMENT_COLORS[segments.len() % SEGMENT_COLORS.len()].to_string()
        });
        let segment = Segment::new_for_insert(
            name.get(),
            description.get(),
            criteria.get(),
            color,
            Utc::now(),
        );
        match store.add_segment(segment) {
            Ok(()) => {
                set_error.set(None);
                on_saved.run(());
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <Modal title="Create New Segment".to_string() on_close=on_cancel>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form">
                <label class="form__field">
                    <span class="form__label">"Name"</span>
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Segment name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__field">
                    <span class="form__label">"Description"</span>
                    <textarea
                        class="form__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="form__field">
                    <span class="form__label">"Criteria"</span>
                    <textarea
                        class="form__input"
                        placeholder="e.g. Total spent > $500 AND Orders > 5"
                        prop:value=move || criteria.get()
                        on:input=move |ev| criteria.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="form__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                        "Create Segment"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
