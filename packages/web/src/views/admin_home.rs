use dioxus::prelude::*;

use ui::views::UserListView;

use crate::Route;

#[component]
pub fn AdminHome() -> Element {
    let nav = use_navigator();

    rsx! {
        UserListView {
            on_view_user: move |user_id: String| {
                nav.push(Route::AdminUser { user_id });
            },
        }
    }
}
