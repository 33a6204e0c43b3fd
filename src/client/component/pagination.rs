use dioxus::prelude::*;

use crate::model::api::PaginationMetaDto;

use super::Modal;

/// Pager for list pages; `page` is 1-indexed to match the API.
#[component]
pub fn Pagination(
    page: Signal<u64>,
    per_page: Signal<u64>,
    meta: PaginationMetaDto,
) -> Element {
    let mut show_page_jump = use_signal(|| false);
    let mut jump_page_input = use_signal(String::new);

    let total_pages = meta.total_pages.max(1);
    let first_shown = if meta.total == 0 {
        0
    } else {
        (meta.page - 1) * meta.limit + 1
    };
    let last_shown = (meta.page * meta.limit).min(meta.total);

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{per_page()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            per_page.set(value);
                            page.set(1);
                        }
                    },
                    option { value: "5", "5" }
                    option { value: "10", "10" }
                    option { value: "25", "25" }
                    option { value: "50", "50" }
                    option { value: "100", "100" }
                }
                span { "entries" }
            }

            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "Showing {first_shown} to {last_shown} of {meta.total}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !meta.has_prev,
                        onclick: move |_| {
                            if page() > 1 {
                                page.set(page() - 1);
                            }
                        },
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        onclick: move |_| {
                            jump_page_input.set(page().to_string());
                            show_page_jump.set(true);
                        },
                        "Page {meta.page} of {total_pages}"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !meta.has_next,
                        onclick: move |_| {
                            if page() < total_pages {
                                page.set(page() + 1);
                            }
                        },
                        "»"
                    }
                }
            }
        }

        Modal {
            show: show_page_jump,
            title: "Jump to Page".to_string(),
            prevent_close: false,
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Ok(target_page) = jump_page_input().parse::<u64>() {
                        if target_page > 0 && target_page <= total_pages {
                            page.set(target_page);
                            show_page_jump.set(false);
                        }
                    }
                },
                div {
                    class: "form-control w-full flex flex-col gap-3",
                    label {
                        class: "label",
                        span {
                            class: "label-text",
                            "Page number (1-{total_pages})"
                        }
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        min: "1",
                        max: "{total_pages}",
                        value: "{jump_page_input()}",
                        oninput: move |evt| jump_page_input.set(evt.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_page_jump.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "Jump"
                    }
                }
            }
        }
    )
}
