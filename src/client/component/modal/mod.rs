pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Dialog box classes for the two modal sizes.
const DIALOG_CLASS: &str = "w-11/12 max-w-lg";
const FULLSCREEN_CLASS: &str = "w-full h-full max-w-none max-h-none sm:w-11/12 sm:max-w-5xl sm:h-auto sm:max-h-[90vh] m-0 sm:m-auto rounded-none sm:rounded-box";

#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    prevent_close: bool,
    children: Element,
) -> Element {
    rsx!(
        ModalFrame {
            show,
            title,
            prevent_close,
            box_class: DIALOG_CLASS.to_string(),
            {children}
        }
    )
}

/// Larger modal for multi-field forms; fills the screen on small devices.
#[component]
pub fn FullScreenModal(
    show: Signal<bool>,
    title: String,
    prevent_close: bool,
    children: Element,
) -> Element {
    rsx!(
        ModalFrame {
            show,
            title,
            prevent_close,
            box_class: FULLSCREEN_CLASS.to_string(),
            {children}
        }
    )
}

#[component]
fn ModalFrame(
    show: Signal<bool>,
    title: String,
    prevent_close: bool,
    box_class: String,
    children: Element,
) -> Element {
    // Focus modal when it opens so Escape reaches the handler
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    let close = move |_: MouseEvent| {
        if !prevent_close {
            show.set(false);
        }
    };

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && !prevent_close {
                    show.set(false);
                }
            },
            div {
                class: "modal-box border border-base-300 {box_class}",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 { class: "font-bold text-lg", "{title}" }
                    if !prevent_close {
                        button {
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: close,
                            "✕"
                        }
                    }
                }
                div { {children} }
            }
            div {
                class: "modal-backdrop",
                onclick: close,
            }
        }
    )
}
