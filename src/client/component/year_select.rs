use chrono::{Datelike, Utc};
use dioxus::prelude::*;

/// Year filter covering a few years back and one ahead; empty means all years.
#[component]
pub fn YearSelect(year: Signal<Option<i32>>, page: Option<Signal<u64>>) -> Element {
    let current = Utc::now().year();
    let selected = year().map(|y| y.to_string()).unwrap_or_default();

    rsx!(
        select {
            class: "select select-bordered",
            value: "{selected}",
            onchange: move |evt| {
                year.set(evt.value().parse::<i32>().ok());
                if let Some(mut page) = page {
                    page.set(1);
                }
            },
            option { value: "", "All years" }
            for y in (current - 4..=current + 1).rev() {
                option { key: "{y}", value: "{y}", "{y}" }
            }
        }
    )
}
