use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::data::store::AppStore;
use crate::shared::theme::provide_theme_context;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide navigation state, theme and the in-memory data store to
    // the whole app via context.
    provide_context(AppGlobalContext::new());
    provide_theme_context();
    provide_context(AppStore::seeded());

    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    ctx.init_url_sync();

    view! {
        <Shell />
    }
}
