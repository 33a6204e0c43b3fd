use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaRightFromBracket, FaWallet},
    Icon,
};

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Header() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let user_name = user_state.read().user.as_ref().map(|u| u.name.clone());
    let user_is_admin = user_state.read().is_admin();
    let fetch_completed = user_state.read().fetched;

    let on_logout = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(err) = logout().await {
                tracing::error!("Failed to log out: {}", err);
            }
            user_state.set(UserState {
                user: None,
                fetched: true,
            });
            nav.push(Route::Login {});
        });
        #[cfg(not(feature = "web"))]
        {
            user_state.write().user = None;
            nav.push(Route::Login {});
        }
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Dashboard {},
                div {
                    class: "flex items-center gap-3",
                    Icon { width: 28, height: 28, icon: FaWallet }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
            if fetch_completed && user_name.is_some() {
                div {
                    class: "hidden md:flex items-center gap-1",
                    Link { to: Route::Budgets {}, class: "btn btn-ghost btn-sm", "Budgets" }
                    Link { to: Route::Transactions {}, class: "btn btn-ghost btn-sm", "Transactions" }
                    Link { to: Route::BudgetOwners {}, class: "btn btn-ghost btn-sm", "Budget Owners" }
                    Link { to: Route::Categories {}, class: "btn btn-ghost btn-sm", "Categories" }
                    if user_is_admin {
                        Link { to: Route::AdminUsers {}, class: "btn btn-ghost btn-sm", "Users" }
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(name) = user_name.filter(|_| fetch_completed) {
                span { class: "hidden sm:inline opacity-70", "{name}" }
                button {
                    class: "btn btn-outline flex gap-2 items-center",
                    onclick: on_logout,
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                    p { "Logout" }
                }
            } else if fetch_completed {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Login"
                }
            }
        }
    })
}
