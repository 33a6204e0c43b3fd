use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaWallet, Icon};

use crate::client::{
    component::{LoadingPage, Page},
    constant::SITE_NAME,
    router::Route,
    store::user::UserState,
};

#[cfg(feature = "web")]
use crate::client::api::auth::login;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Login() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut should_submit = use_signal(|| false);

    // Redirect users who already have a session
    use_effect(move || {
        let state = user_state.read();
        if state.fetched && state.user.is_some() {
            nav.push(Route::Dashboard {});
        }
    });

    #[cfg(feature = "web")]
    let login_future = use_resource(move || async move {
        if should_submit() {
            Some(login(email.peek().clone(), password.peek().clone()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = login_future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    user_state.set(UserState {
                        user: Some(user.clone()),
                        fetched: true,
                    });
                    password.set(String::new());
                }
                Err(err) => {
                    tracing::warn!("Login failed: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if email().trim().is_empty() || password().is_empty() {
            error_message.set(Some("Email and password are required".to_string()));
            return;
        }

        error_message.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let state = user_state.read().clone();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !state.fetched || state.user.is_some() {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                div {
                    class: "flex flex-col items-center gap-4",
                    Icon { width: 64, height: 64, icon: FaWallet }
                    p { class: "text-2xl", {SITE_NAME} }
                }
                form {
                    class: "card bg-base-200 w-full max-w-sm",
                    onsubmit: on_submit,
                    div {
                        class: "card-body flex flex-col gap-4",
                        label {
                            class: "form-control w-full flex flex-col gap-1",
                            span { class: "label-text", "Email" }
                            input {
                                r#type: "email",
                                class: "input input-bordered w-full",
                                autocomplete: "username",
                                value: "{email()}",
                                disabled: is_submitting,
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        label {
                            class: "form-control w-full flex flex-col gap-1",
                            span { class: "label-text", "Password" }
                            input {
                                r#type: "password",
                                class: "input input-bordered w-full",
                                autocomplete: "current-password",
                                value: "{password()}",
                                disabled: is_submitting,
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }
                        if let Some(err) = error_message() {
                            div {
                                class: "alert alert-error",
                                span { "{err}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting,
                            if is_submitting {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Signing in..."
                            } else {
                                "Sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}
