use dioxus::prelude::*;

use super::Modal;

/// Yes/no dialog for destructive actions; `error` shows the last failure inline.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: Element,
    #[props(default)] error: Option<String>,
    confirm_text: String,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            {message}
            if let Some(err) = error {
                div { class: "alert alert-error", span { "{err}" } }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| show.set(false),
                    disabled: is_processing,
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-error",
                    onclick: move |_| on_confirm.call(()),
                    disabled: is_processing,
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                        "Deleting..."
                    } else {
                        "{confirm_text}"
                    }
                }
            }
        }
    )
}
