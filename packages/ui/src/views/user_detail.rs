use dioxus::prelude::*;

use crate::icons::FaArrowLeft;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Read-only profile of one user, reached from the admin table.
#[component]
pub fn UserDetailView(user_id: String, on_back: EventHandler<()>) -> Element {
    // Track the id in a signal so the resource re-runs on route param change
    let mut id_signal = use_signal(|| user_id.clone());
    if *id_signal.peek() != user_id {
        id_signal.set(user_id.clone());
    }

    let user = use_resource(move || {
        let id = id_signal();
        async move {
            let result = api::get_user(id).await;
            if let Err(e) = &result {
                tracing::error!("Failed to load user: {}", e);
            }
            result
        }
    });

    let body = match &*user.read() {
        None => rsx! { div { class: "view-loading", "Loading..." } },
        Some(Err(e)) => rsx! {
            div { class: "admin-home__error", role: "alert", "Could not load user: {e}" }
        },
        Some(Ok(None)) => rsx! { div { class: "admin-home__empty", "User not found." } },
        Some(Ok(Some(user))) => {
            let joined = user.joined_date();
            let role = user.role();
            rsx! {
                div {
                    class: "user-detail__card",
                    img {
                        class: "user-detail__avatar",
                        src: "{user.profile_picture_url}",
                        alt: "{user.username}",
                    }
                    dl {
                        dt { "Username" }
                        dd { "{user.username}" }
                        dt { "Email" }
                        dd { "{user.email}" }
                        dt { "Joined Date" }
                        dd { "{joined}" }
                        dt { "Role" }
                        dd { "{role}" }
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "user-detail",
            button {
                class: "secondary",
                onclick: move |_| on_back.call(()),
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                "Back to users"
            }
            {body}
        }
    }
}
