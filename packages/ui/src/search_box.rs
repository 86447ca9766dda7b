use dioxus::prelude::*;

use crate::icons::{FaMagnifyingGlass, FaXmark};
use crate::Icon;

/// Search input with a clear button that appears once something is typed.
#[component]
pub fn SearchBox(
    value: String,
    on_input: EventHandler<String>,
    on_clear: EventHandler<()>,
    #[props(default = "Search by username or email...".to_string())] placeholder: String,
) -> Element {
    rsx! {
        div {
            class: "search-box",
            span {
                class: "search-box__icon",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            if !value.is_empty() {
                button {
                    class: "search-box__clear",
                    title: "Clear search",
                    onclick: move |_| on_clear.call(()),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
        }
    }
}
