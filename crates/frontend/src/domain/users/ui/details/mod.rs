use crate::shared::components::modal::Modal;
use crate::shared::date_utils::{format_date, format_datetime, format_money};
use contracts::domain::user::User;
use contracts::shared::list_filter::FacetValue;
use leptos::prelude::*;

/// Read-only user profile dialog.
#[component]
#[allow(non_snake_case)]
pub fn UserProfile(user: User, on_close: Callback<()>) -> impl IntoView {
    let title = user.name.clone();

    view! {
        <Modal title=title on_close=on_close>
            <div class="profile">
                <div class="profile__header">
                    <span class="avatar avatar--large">{user.initials()}</span>
                    <div>
                        <p>{user.email.clone()}</p>
                        <p class="card__line--muted">{user.location.clone()}</p>
                    </div>
                </div>

                <dl class="profile__facts">
                    <div>
                        <dt>"Role"</dt>
                        <dd>{user.role.display_name()}</dd>
                    </div>
                    <div>
                        <dt>"Status"</dt>
                        <dd>{user.status.display_name()}</dd>
                    </div>
                    <div>
                        <dt>"Segment"</dt>
                        <dd>{user.segment.display_name()}</dd>
                    </div>
                    <div>
                        <dt>"Registered"</dt>
                        <dd>{format_date(user.registration_date)}</dd>
                    </div>
                    <div>
                        <dt>"Last login"</dt>
                        <dd>{format_datetime(user.last_login)}</dd>
                    </div>
                    <div>
                        <dt>"Orders"</dt>
                        <dd>{user.total_orders}</dd>
                    </div>
                    <div>
                        <dt>"Total spent"</dt>
                        <dd>{format_money(user.total_spent)}</dd>
                    </div>
                </dl>
            </div>
        </Modal>
    }
}
