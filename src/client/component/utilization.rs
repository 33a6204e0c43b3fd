use dioxus::prelude::*;

use crate::client::format;

#[component]
pub fn UtilizationBar(percentage: f64) -> Element {
    let class = format::utilization_class(percentage);
    let label = format::percentage(percentage);
    let value = percentage.clamp(0.0, 100.0);

    rsx!(
        div {
            class: "flex items-center gap-2 min-w-40",
            progress {
                class: "progress {class} w-full",
                value: "{value}",
                max: "100",
            }
            span { class: "text-xs whitespace-nowrap", "{label}" }
        }
    )
}
