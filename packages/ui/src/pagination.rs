use dioxus::prelude::*;

use directory::UserPage;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// Previous / page number / Next controls for the user table.
///
/// Buttons at the boundaries render disabled; the callbacks only fire for
/// enabled buttons.
#[component]
pub fn Pagination(
    page: UserPage,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        nav {
            class: "pagination",
            button {
                class: "pagination__step",
                disabled: !page.has_previous,
                onclick: move |_| on_previous.call(()),
                Icon { icon: FaChevronLeft, width: 10, height: 10 }
                "Previous"
            }
            for number in page.numbers() {
                button {
                    key: "{number}",
                    class: if number == page.number { "pagination__page pagination__page--active" } else { "pagination__page" },
                    onclick: move |_| on_select.call(number),
                    "{number}"
                }
            }
            button {
                class: "pagination__step",
                disabled: !page.has_next,
                onclick: move |_| on_next.call(()),
                "Next"
                Icon { icon: FaChevronRight, width: 10, height: 10 }
            }
        }
    }
}
