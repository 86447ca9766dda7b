use dioxus::prelude::*;

use ui::views::UserDetailView;

use crate::Route;

#[component]
pub fn AdminUser(user_id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        UserDetailView {
            user_id,
            on_back: move |_| {
                nav.push(Route::AdminHome {});
            },
        }
    }
}
