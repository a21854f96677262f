use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Closed set of pages reachable from the sidebar. The active page is
/// mirrored into the `?page=` query parameter so reloads and links land
/// on the same view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKey {
    #[default]
    Overview,
    Analytics,
    Orders,
    Coupons,
    Users,
    Segmentation,
    Reports,
    Settings,
}

impl PageKey {
    pub fn code(&self) -> &'static str {
        match self {
            PageKey::Overview => "overview",
            PageKey::Analytics => "analytics",
            PageKey::Orders => "orders",
            PageKey::Coupons => "coupons",
            PageKey::Users => "users",
            PageKey::Segmentation => "segmentation",
            PageKey::Reports => "reports",
            PageKey::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Overview => "Dashboard",
            PageKey::Analytics => "Analytics",
            PageKey::Orders => "Orders",
            PageKey::Coupons => "Coupons",
            PageKey::Users => "Users",
            PageKey::Segmentation => "User Segmentation",
            PageKey::Reports => "Reports",
            PageKey::Settings => "Settings",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "overview" => Some(PageKey::Overview),
            "analytics" => Some(PageKey::Analytics),
            "orders" => Some(PageKey::Orders),
            "coupons" => Some(PageKey::Coupons),
            "users" => Some(PageKey::Users),
            "segmentation" => Some(PageKey::Segmentation),
            "reports" => Some(PageKey::Reports),
            "settings" => Some(PageKey::Settings),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PageKey::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: PageKey) {
        self.active.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Restore the active page from the `?page=` query parameter and
    /// keep the URL in sync afterwards. Runs once when the shell is
    /// created.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|code| PageKey::from_code(code)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                page.code().to_string(),
            )]))
            .unwrap_or_default();
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let url = format!("?{}", query_string);
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&url),
                    );
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_codes_roundtrip() {
        for page in [
            PageKey::Overview,
            PageKey::Analytics,
            PageKey::Orders,
            PageKey::Coupons,
            PageKey::Users,
            PageKey::Segmentation,
            PageKey::Reports,
            PageKey::Settings,
        ] {
            assert_eq!(PageKey::from_code(page.code()), Some(page));
            assert!(!page.title().is_empty());
        }
        assert_eq!(PageKey::from_code("nope"), None);
    }
}
