use crate::shared::data::store::AppStore;
use crate::shared::icons::icon;
use contracts::domain::settings::PlatformSettings;
use leptos::prelude::*;
use thaw::*;

/// Settings page: edits a local draft of [`PlatformSettings`]; Save
/// validates and commits it to the store, Reset restores the defaults.
#[component]
#[allow(non_snake_case)]
pub fn SettingsPage() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");
    let draft = RwSignal::new(store.settings.get_untracked());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saved, set_saved) = signal(false);

    let handle_save = move |_| match store.save_settings(draft.get()) {
        Ok(()) => {
            set_error.set(None);
            set_saved.set(true);
        }
        Err(e) => {
            set_saved.set(false);
            set_error.set(Some(e));
        }
    };

    let handle_reset = move |_| {
        store.reset_settings();
        draft.set(PlatformSettings::default());
        set_error.set(None);
        set_saved.set(false);
    };

    let text_field = move |label: &'static str,
                           value: fn(&PlatformSettings) -> String,
                           set: fn(&mut PlatformSettings, String)| {
        view! {
            <label class="form__field">
                <span class="form__label">{label}</span>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || draft.with(value)
                    on:input=move |ev| {
                        draft.update(|d| set(d, event_target_value(&ev)));
                    }
                />
            </label>
        }
    };

    let toggle_field = move |label: &'static str,
                             description: &'static str,
                             value: fn(&PlatformSettings) -> bool,
                             set: fn(&mut PlatformSettings, bool)| {
        view! {
            <div class="toggle-row">
                <div>
                    <div class="toggle-row__label">{label}</div>
                    <div class="toggle-row__description">{description}</div>
                </div>
                <input
                    type="checkbox"
                    class="toggle-row__switch"
                    prop:checked=move || draft.with(value)
                    on:change=move |ev| {
                        draft.update(|d| set(d, event_target_checked(&ev)));
                    }
                />
            </div>
        }
    };

    let number_field = move |label: &'static str,
                             value: fn(&PlatformSettings) -> u32,
                             set: fn(&mut PlatformSettings, u32)| {
        view! {
            <label class="form__field">
                <span class="form__label">{label}</span>
                <input
                    type="number"
                    class="form__input"
                    prop:value=move || draft.with(value).to_string()
                    on:input=move |ev| {
                        if let Ok(parsed) = event_target_value(&ev).parse::<u32>() {
                            draft.update(|d| set(d, parsed));
                        }
                    }
                />
            </label>
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Settings"</h2>
                    <p class="header__subtitle">
                        "Manage your application preferences and configurations"
                    </p>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=handle_reset>
                        "Reset"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                        "Save Changes"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || {
                if saved.get() {
                    view! { <div class="success">"Settings saved"</div> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="panel">
                <h3 class="panel__title">
                    {icon("store")}
                    "General"
                </h3>
                <div class="form form--two-col">
                    {text_field("Company name", |d| d.company_name.clone(), |d, v| d.company_name = v)}
                    {text_field("Company email", |d| d.company_email.clone(), |d, v| d.company_email = v)}
                    {text_field("Company phone", |d| d.company_phone.clone(), |d, v| d.company_phone = v)}
                    {text_field("Company address", |d| d.company_address.clone(), |d, v| d.company_address = v)}
                    {text_field("Timezone", |d| d.timezone.clone(), |d, v| d.timezone = v)}
                    {text_field("Currency", |d| d.currency.clone(), |d, v| d.currency = v)}
                    {text_field("Language", |d| d.language.clone(), |d, v| d.language = v)}
                </div>
            </div>

            <div class="panel">
                <h3 class="panel__title">
                    {icon("bell")}
                    "Notification Preferences"
                </h3>
                <div class="form">
                    {toggle_field(
                        "Email Notifications",
                        "Receive notifications via email",
                        |d| d.email_notifications,
                        |d, v| d.email_notifications = v,
                    )}
                    {toggle_field(
                        "Push Notifications",
                        "Receive browser push notifications",
                        |d| d.push_notifications,
                        |d, v| d.push_notifications = v,
                    )}
                    {toggle_field(
                        "Order Notifications",
                        "Get notified about new orders",
                        |d| d.order_notifications,
                        |d, v| d.order_notifications = v,
                    )}
                    {toggle_field(
                        "Inventory Alerts",
                        "Low stock and out of stock alerts",
                        |d| d.inventory_alerts,
                        |d, v| d.inventory_alerts = v,
                    )}
                    {toggle_field(
                        "Marketing Emails",
                        "Promotional and marketing content",
                        |d| d.marketing_emails,
                        |d, v| d.marketing_emails = v,
                    )}
                    {toggle_field(
                        "Weekly Reports",
                        "Automated weekly performance reports",
                        |d| d.weekly_reports,
                        |d, v| d.weekly_reports = v,
                    )}
                </div>
            </div>

            <div class="panel">
                <h3 class="panel__title">
                    {icon("shield")}
                    "Security"
                </h3>
                <div class="form">
                    {toggle_field(
                        "Two-Factor Authentication",
                        "Require a second factor at sign-in",
                        |d| d.two_factor_auth,
                        |d, v| d.two_factor_auth = v,
                    )}
                    <div class="form form--two-col">
                        {number_field(
                            "Session timeout (minutes)",
                            |d| d.session_timeout_minutes,
                            |d, v| d.session_timeout_minutes = v,
                        )}
                        {number_field(
                            "Password expiry (days)",
                            |d| d.password_expiry_days,
                            |d, v| d.password_expiry_days = v,
                        )}
                        {number_field(
                            "Max login attempts",
                            |d| d.max_login_attempts,
                            |d, v| d.max_login_attempts = v,
                        )}
                    </div>
                </div>
            </div>

            <div class="panel">
                <h3 class="panel__title">
                    {icon("monitor")}
                    "Appearance"
                </h3>
                <div class="form">
                    {toggle_field(
                        "Enable Animations",
                        "Smooth transitions and micro-interactions",
                        |d| d.animations,
                        |d, v| d.animations = v,
                    )}
                    {toggle_field(
                        "Compact Mode",
                        "Reduce spacing for more content density",
                        |d| d.compact_mode,
                        |d, v| d.compact_mode = v,
                    )}
                    {toggle_field(
                        "Collapsed Sidebar",
                        "Start with sidebar collapsed by default",
                        |d| d.sidebar_collapsed,
                        |d, v| d.sidebar_collapsed = v,
                    )}
                </div>
            </div>

            <div class="panel">
                <h3 class="panel__title">
                    {icon("globe")}
                    "API"
                </h3>
                <div class="form form--two-col">
                    {number_field(
                        "API rate limit (req/hour)",
                        |d| d.api_rate_limit,
                        |d, v| d.api_rate_limit = v,
                    )}
                    {text_field("API version", |d| d.api_version.clone(), |d, v| d.api_version = v)}
                    {text_field("Webhook URL", |d| d.webhook_url.clone(), |d, v| d.webhook_url = v)}
                </div>
            </div>
        </div>
    }
}
