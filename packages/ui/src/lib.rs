//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod search_box;
pub use search_box::SearchBox;

mod user_row;
pub use user_row::UserRow;

mod pagination;
pub use pagination::Pagination;
