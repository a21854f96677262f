pub mod state;

use self::state::create_state;
use crate::domain::users::ui::details::UserProfile;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::facet_select::{facet_options, FacetSelect};
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::store::AppStore;
use crate::shared::date_utils::{format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_list, SearchInput, Sortable};
use contracts::domain::user::User;
use std::cmp::Ordering;
use contracts::enums::user_role::UserRole;
use contracts::enums::user_segment::UserSegment;
use contracts::enums::user_status::UserStatus;
use contracts::shared::list_filter::{count_matching, FacetSelection, FacetValue, ListFilter};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn status_badge_class(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "badge badge--success",
        UserStatus::Inactive => "badge badge--neutral",
        UserStatus::Banned => "badge badge--error",
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "spent" => self
                .total_spent
                .partial_cmp(&other.total_spent)
                .unwrap_or(Ordering::Equal),
            "orders" => self.total_orders.cmp(&other.total_orders),
            "registered" => self.registration_date.cmp(&other.registration_date),
            _ => Ordering::Equal,
        }
    }
}

const SORT_OPTIONS: [(&str, &str); 4] = [
    ("name", "Name"),
    ("spent", "Total spent"),
    ("orders", "Orders"),
    ("registered", "Registration date"),
];

fn segment_badge_class(segment: UserSegment) -> &'static str {
    match segment {
        UserSegment::Premium => "badge badge--purple",
        UserSegment::Regular => "badge badge--info",
        UserSegment::New => "badge badge--success",
        UserSegment::Churned => "badge badge--warning",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UsersList() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let profile_user: RwSignal<Option<User>> = RwSignal::new(None);

    let filtered_users = move || {
        let s = state.get();
        let mut users = store.users.with(|users| {
            ListFilter::with_search(&s.search)
                .facet(s.role, |user: &User| user.role)
                .facet(s.status, |user: &User| user.status)
                .facet(s.segment, |user: &User| user.segment)
                .apply(users)
        });
        sort_list(&mut users, &s.sort_field, !s.sort_descending);
        users
    };

    let total_users = move || store.users.with(|users| users.len()) as f64;
    let active_users = move || {
        store
            .users
            .with(|users| count_matching(users, |u| u.status == UserStatus::Active)) as f64
    };
    let premium_users = move || {
        store
            .users
            .with(|users| count_matching(users, |u| u.segment == UserSegment::Premium))
            as f64
    };
    let new_users = move || {
        store
            .users
            .with(|users| count_matching(users, |u| u.segment == UserSegment::New)) as f64
    };

    let clear_filters = move || {
        state.set(Default::default());
    };

    let run = move |result: Result<(), String>| match result {
        Ok(()) => set_error.set(None),
        Err(e) => set_error.set(Some(e)),
    };

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Users"</h2>
                    <p class="header__subtitle">"Manage user accounts and permissions"</p>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Total Users".to_string()
                    icon_name="users".to_string()
                    value=Signal::derive(move || Some(total_users()))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Active Users".to_string()
                    icon_name="user-check".to_string()
                    value=Signal::derive(move || Some(active_users()))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Premium Users".to_string()
                    icon_name="crown".to_string()
                    value=Signal::derive(move || Some(premium_users()))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="New This Month".to_string()
                    icon_name="user-x".to_string()
                    value=Signal::derive(move || Some(new_users()))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.get().search)
                    on_change=Callback::new(move |term: String| {
                        state.update(|s| s.search = term);
                    })
                    placeholder="Search users by name or email..."
                />
                <FacetSelect
                    all_label="All Roles"
                    options={facet_options::<UserRole>()}
                    value=Signal::derive(move || state.get().role.code())
                    on_change=Callback::new(move |code: String| {
                        state.update(|s| s.role = FacetSelection::parse(&code));
                    })
                />
                <FacetSelect
                    all_label="All Status"
                    options={facet_options::<UserStatus>()}
                    value=Signal::derive(move || state.get().status.code())
                    on_change=Callback::new(move |code: String| {
                        state.update(|s| s.status = FacetSelection::parse(&code));
                    })
                />
                <FacetSelect
                    all_label="All Segments"
                    options={facet_options::<UserSegment>()}
                    value=Signal::derive(move || state.get().segment.code())
                    on_change=Callback::new(move |code: String| {
                        state.update(|s| s.segment = FacetSelection::parse(&code));
                    })
                />
                <select
                    class="facet-select"
                    title="Sort by"
                    prop:value=move || state.get().sort_field
                    on:change=move |ev| {
                        state.update(|s| s.sort_field = event_target_value(&ev));
                    }
                >
                    <option value="">"Default order"</option>
                    {SORT_OPTIONS
                        .iter()
                        .map(|(code, label)| {
                            view! { <option value=*code>{*label}</option> }
                        })
                        .collect_view()}
                </select>
                <button
                    class="button button--icon"
                    title="Toggle sort direction"
                    on:click=move |_| {
                        state.update(|s| s.sort_descending = !s.sort_descending);
                    }
                >
                    {move || {
                        if state.get().sort_descending {
                            icon("trending-down")
                        } else {
                            icon("trending-up")
                        }
                    }}
                </button>
            </div>

            <div class="card-list">
                {move || {
                    filtered_users()
                        .into_iter()
                        .map(|user| {
                            let id_for_ban = user.id.clone();
                            let id_for_activate = user.id.clone();
                            let user_for_profile = user.clone();
                            let banned = user.status == UserStatus::Banned;
                            view! {
                                <div class="card card--row">
                                    <div class="card__main">
                                        <div class="card__title-row">
                                            <span class="avatar">{user.initials()}</span>
                                            <h3 class="card__title">{user.name.clone()}</h3>
                                            <span class=status_badge_class(user.status)>
                                                {user.status.display_name()}
                                            </span>
                                            <span class=segment_badge_class(user.segment)>
                                                {user.segment.display_name()}
                                            </span>
                                        </div>
                                        <p class="card__line">{user.email.clone()}</p>
                                        <p class="card__line card__line--muted">
                                            {icon("map-pin")}
                                            {user.location.clone()}
                                            " • Joined "
                                            {format_date(user.registration_date)}
                                        </p>
                                    </div>
                                    <div class="card__side">
                                        <p class="card__amount">{format_money(user.total_spent)}</p>
                                        <p class="card__line card__line--muted">
                                            {format!("{} orders", user.total_orders)}
                                        </p>
                                        <p class="card__line card__line--muted">
                                            {user.role.display_name()}
                                        </p>
                                    </div>
                                    <div class="card__actions">
                                        <button
                                            class="button button--icon"
                                            title="View profile"
                                            on:click=move |_| {
                                                profile_user.set(Some(user_for_profile.clone()));
                                            }
                                        >
                                            {icon("eye")}
                                        </button>
                                        {if banned {
                                            view! {
                                                <button
                                                    class="button button--icon"
                                                    title="Reactivate user"
                                                    on:click=move |_| {
                                                        run(store.activate_user(&id_for_activate));
                                                    }
                                                >
                                                    {icon("user-check")}
                                                </button>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Ban user"
                                                    on:click=move |_| {
                                                        run(store.ban_user(&id_for_ban));
                                                    }
                                                >
                                                    {icon("ban")}
                                                </button>
                                            }
                                                .into_any()
                                        }}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                if filtered_users().is_empty() {
                    view! {
                        <EmptyState
                            icon_name="users"
                            title="No users found"
                            on_clear=Callback::new(move |_| clear_filters())
                        />
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                profile_user
                    .get()
                    .map(|user| {
                        view! {
                            <UserProfile
                                user=user
                                on_close=Callback::new(move |_| profile_user.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
