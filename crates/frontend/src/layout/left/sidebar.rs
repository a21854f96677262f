//! Sidebar with grouped navigation items.

use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(PageKey, &'static str)>, // (page, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Overview",
            items: vec![
                (PageKey::Overview, "layout-dashboard"),
                (PageKey::Analytics, "bar-chart"),
            ],
        },
        MenuGroup {
            label: "Commerce",
            items: vec![
                (PageKey::Orders, "shopping-cart"),
                (PageKey::Coupons, "tag"),
            ],
        },
        MenuGroup {
            label: "Customers",
            items: vec![
                (PageKey::Users, "users"),
                (PageKey::Segmentation, "pie-chart"),
            ],
        },
        MenuGroup {
            label: "Administration",
            items: vec![
                (PageKey::Reports, "file-text"),
                (PageKey::Settings, "settings"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                {icon("store")}
                <span class="sidebar__brand-name">"Commerce Admin"</span>
            </div>

            {menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            <ul class="sidebar__items">
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(page, icon_name)| {
                                        view! {
                                            <li>
                                                <button
                                                    class="sidebar__item"
                                                    class:sidebar__item--active={move || {
                                                        ctx.active.get() == page
                                                    }}
                                                    on:click=move |_| ctx.navigate(page)
                                                >
                                                    {icon(icon_name)}
                                                    <span>{page.title()}</span>
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
