use crate::shared::components::modal::Modal;
use chrono::{NaiveDate, TimeZone, Utc};
use contracts::domain::coupon::{Coupon, CouponDraft};
use contracts::enums::coupon_type::CouponType;
use contracts::shared::list_filter::FacetValue;
use leptos::prelude::*;
use thaw::*;

use crate::shared::data::store::AppStore;

fn parse_expiration(raw: &str) -> Result<chrono::DateTime<Utc>, String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| "Enter a valid expiration date".to_string())?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| "Enter a valid expiration date".to_string())?;
    Ok(Utc.from_utc_datetime(&midnight))
}

/// Create-coupon dialog. Validates the draft and inserts it into the
/// store; the new coupon appears in the list immediately.
#[component]
#[allow(non_snake_case)]
pub fn CouponCreate(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");
    let (error, set_error) = signal::<Option<String>>(None);

    let code = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let coupon_type = RwSignal::new(CouponType::Percentage);
    let value = RwSignal::new(String::new());
    let usage_limit = RwSignal::new(String::new());
    let expiration = RwSignal::new(String::new());

    let handle_save = move |_| {
        let draft_value = match value.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_error.set(Some("Enter a numeric discount value".to_string()));
                return;
            }
        };
        let draft_limit = {
            let raw = usage_limit.get();
            let raw = raw.trim();
            if raw.is_empty() {
                None
            } else {
                match raw.parse::<u32>() {
                    Ok(limit) => Some(limit),
                    Err(_) => {
                        set_error.set(Some("Usage limit must be a whole number".to_string()));
                        return;
                    }
                }
            }
        };
        let expiration_date = match parse_expiration(expiration.get().trim()) {
            Ok(date) => date,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        let coupon = Coupon::new_for_insert(CouponDraft {
            code: code.get(),
            description: description.get(),
            coupon_type: coupon_type.get(),
            value: draft_value,
            usage_limit: draft_limit,
            expiration_date,
        });

        match store.add_coupon(coupon) {
            Ok(()) => {
                set_error.set(None);
                on_saved.run(());
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <Modal title="Create New Coupon".to_string() on_close=on_cancel>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form">
                <label class="form__field">
                    <span class="form__label">"Code"</span>
                    <input
                        type="text"
                        class="form__input"
                        placeholder="SUMMER25"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__field">
                    <span class="form__label">"Description"</span>
                    <input
                        type="text"
                        class="form__input"
                        placeholder="25% off summer collection"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>

                <div class="form__row">
                    <label class="form__field">
                        <span class="form__label">"Type"</span>
                        <select
                            class="facet-select"
                            prop:value=move || coupon_type.get().code().to_string()
                            on:change=move |ev| {
                                if let Some(t) = CouponType::from_code(&event_target_value(&ev)) {
                                    coupon_type.set(t);
                                }
                            }
                        >
                            {CouponType::all()
                                .into_iter()
                                .map(|t| {
                                    view! { <option value=t.code()>{t.display_name()}</option> }
                                })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="form__field">
                        <span class="form__label">"Value"</span>
                        <input
                            type="number"
                            class="form__input"
                            placeholder="25"
                            prop:value=move || value.get()
                            on:input=move |ev| value.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="form__row">
                    <label class="form__field">
                        <span class="form__label">"Usage limit (optional)"</span>
                        <input
                            type="number"
                            class="form__input"
                            placeholder="1000"
                            prop:value=move || usage_limit.get()
                            on:input=move |ev| usage_limit.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form__field">
                        <span class="form__label">"Expiration date"</span>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || expiration.get()
                            on:input=move |ev| expiration.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="form__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                        "Create Coupon"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiration_parsing() {
        assert!(parse_expiration("2024-09-30").is_ok());
        assert!(parse_expiration("09/30/2024").is_err());
        assert!(parse_expiration("").is_err());
    }
}
