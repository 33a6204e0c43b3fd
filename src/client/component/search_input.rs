use dioxus::prelude::*;

/// Text filter that writes to `query` once typing pauses.
///
/// Resets `page` to 1 whenever the committed query changes.
#[component]
pub fn SearchInput(query: Signal<String>, page: Signal<u64>, placeholder: String) -> Element {
    let mut input = use_signal(|| query.peek().clone());

    #[cfg(feature = "web")]
    use_resource(move || async move {
        let value = input();
        gloo_timers::future::TimeoutFuture::new(300).await;
        if *query.peek() != value {
            query.set(value);
            page.set(1);
        }
    });

    #[cfg(not(feature = "web"))]
    use_effect(move || {
        let value = input();
        if *query.peek() != value {
            query.set(value);
            page.set(1);
        }
    });

    rsx!(
        input {
            r#type: "search",
            class: "input input-bordered w-full sm:max-w-xs",
            placeholder: "{placeholder}",
            value: "{input()}",
            oninput: move |evt| input.set(evt.value()),
        }
    )
}
