use dioxus::prelude::*;

use directory::{Action, UserListState};

use crate::{Pagination, SearchBox, UserRow};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Admin home: searchable, paginated table of every user.
///
/// The collection is fetched once on mount; searching and paging afterwards
/// only update the local [`UserListState`]. The platform package turns
/// `on_view_user` into navigation to the user's detail route.
#[component]
pub fn UserListView(
    /// Called with the record id when a row's View button is pressed.
    on_view_user: EventHandler<String>,
) -> Element {
    let mut state = use_signal(UserListState::new);

    // Single load on mount; the task is dropped with the component, so a late
    // response never lands on an unmounted view.
    let _loader = use_resource(move || async move {
        match api::list_users().await {
            Ok(users) => {
                tracing::debug!("Loaded {} users", users.len());
                state.write().update(Action::Loaded(users));
            }
            Err(e) => {
                tracing::error!("Failed to load users: {}", e);
                state.write().update(Action::LoadFailed(e.to_string()));
            }
        }
    });

    if state.read().is_loading() {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "view-loading",
                "Loading..."
            }
        };
    }

    let search_term = state.read().search_term().to_string();
    let error = state.read().error().map(str::to_string);
    let page = state.read().page();
    let first_position = (page.number - 1) * directory::USERS_PER_PAGE;
    let showing_from = first_position + 1;
    let showing_to = first_position + page.users.len();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "admin-home",

            div {
                class: "admin-home__header",
                h1 { "Admin Home Page" }
                SearchBox {
                    value: search_term,
                    on_input: move |term: String| state.write().update(Action::Search(term)),
                    on_clear: move |_| state.write().update(Action::ClearSearch),
                }
            }

            if let Some(message) = error {
                div {
                    class: "admin-home__error",
                    role: "alert",
                    "Could not load users: {message}"
                }
            }

            div {
                class: "user-table",
                table {
                    thead {
                        tr {
                            th { "#" }
                            th { "Profile" }
                            th { "Username" }
                            th { "Email" }
                            th { "Joined Date" }
                            th { "Role" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for (index, user) in page.users.iter().enumerate() {
                            UserRow {
                                key: "{user.id}",
                                position: index + 1,
                                user: user.clone(),
                                on_view: on_view_user,
                            }
                        }
                    }
                }
            }

            if page.total_matches == 0 {
                div {
                    class: "admin-home__empty",
                    "No user found, based on your search."
                }
            } else {
                Pagination {
                    page: page.clone(),
                    on_previous: move |_| state.write().update(Action::PreviousPage),
                    on_next: move |_| state.write().update(Action::NextPage),
                    on_select: move |number: usize| state.write().update(Action::GoToPage(number)),
                }
                p {
                    class: "admin-home__summary",
                    "Showing {showing_from} to {showing_to} of {page.total_matches}"
                }
            }
        }
    }
}
