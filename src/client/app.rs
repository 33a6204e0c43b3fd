use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use crate::client::api::auth::get_current_user;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Fetch user on first load
    #[cfg(feature = "web")]
    use_future(move || async move {
        let user = match get_current_user().await {
            Ok(user) => user,
            Err(err) => {
                tracing::error!("Failed to fetch current user: {}", err);
                None
            }
        };
        user_state.set(UserState {
            user,
            fetched: true,
        });
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Budget planning and expense tracking per budget owner"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
