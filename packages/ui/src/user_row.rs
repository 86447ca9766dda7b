use dioxus::prelude::*;

use api::UserRecord;

/// One row of the admin user table.
#[component]
pub fn UserRow(
    /// 1-based position on the current page.
    position: usize,
    user: UserRecord,
    on_view: EventHandler<String>,
) -> Element {
    let user_id = user.id.clone();
    let joined = user.joined_date();
    let role = user.role();

    rsx! {
        tr {
            class: "user-row",
            td { class: "user-row__position", "{position}" }
            td {
                img {
                    class: "user-row__avatar",
                    src: "{user.profile_picture_url}",
                    alt: "{user.username}",
                }
            }
            td { "{user.username}" }
            td { "{user.email}" }
            td { "{joined}" }
            td {
                span {
                    class: if user.is_admin { "role role--admin" } else { "role" },
                    "{role}"
                }
            }
            td {
                class: "user-row__actions",
                button {
                    class: "secondary",
                    onclick: move |_| on_view.call(user_id.clone()),
                    "View"
                }
            }
        }
    }
}
