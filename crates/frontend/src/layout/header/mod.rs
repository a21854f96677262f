use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, Theme};
use leptos::prelude::*;

/// Top bar: sidebar toggle, current page title, theme switcher.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let theme_ctx = use_theme();

    let cycle_theme = move |_| {
        theme_ctx.cycle_theme();
    };

    let theme_icon = move || match theme_ctx.theme.get() {
        Theme::Light => icon("sun"),
        Theme::Dark => icon("moon"),
        Theme::System => icon("monitor"),
    };

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="button button--icon"
                    title="Toggle sidebar"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {icon("menu")}
                </button>
                <h1 class="top-header__title">
                    {move || ctx.active.get().title()}
                </h1>
            </div>
            <div class="top-header__right">
                <button
                    class="button button--icon"
                    title="Switch theme"
                    on:click=cycle_theme
                >
                    {theme_icon}
                </button>
            </div>
        </header>
    }
}
