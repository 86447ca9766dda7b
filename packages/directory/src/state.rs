//! # User list controller
//!
//! [`UserListState`] owns everything the admin user table needs between
//! renders: the load outcome, the search term, and the active page. It changes
//! only through [`UserListState::update`], which applies one [`Action`] at a
//! time.
//!
//! Derived values (the filtered set, the page count, the visible window) are
//! never stored. [`UserListState::page`] recomputes them from the current
//! inputs on every call, so a rendered [`UserPage`] can never be stale
//! relative to the search term or the loaded list.
//!
//! ## Page rules
//!
//! - The page resets to 1 whenever the filtered set can change: a search edit,
//!   clearing the search, or a load result.
//! - `PreviousPage` does nothing on page 1; `NextPage` does nothing on the
//!   last page (or when there are no pages).
//! - `GoToPage` ignores pages outside `1..=total_pages`.

use crate::filter::filter_users;
use crate::models::UserRecord;
use crate::pagination::{page_window, total_pages, USERS_PER_PAGE};

/// Outcome of the single collection request.
#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Loaded(Vec<UserRecord>),
    /// The request failed; the list is treated as empty.
    Failed(String),
}

/// A user interaction or a load result.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Loaded(Vec<UserRecord>),
    LoadFailed(String),
    /// New contents of the search input.
    Search(String),
    ClearSearch,
    PreviousPage,
    NextPage,
    /// Jump to an absolute, 1-based page.
    GoToPage(usize),
}

/// State of the admin user table for one visit to the page.
#[derive(Clone, Debug, PartialEq)]
pub struct UserListState {
    load: LoadState,
    search_term: String,
    current_page: usize,
}

impl Default for UserListState {
    fn default() -> Self {
        Self {
            load: LoadState::Loading,
            search_term: String::new(),
            current_page: 1,
        }
    }
}

/// Everything needed to render one page of the table.
#[derive(Clone, Debug, PartialEq)]
pub struct UserPage {
    /// Users on the active page, in list order.
    pub users: Vec<UserRecord>,
    /// 1-based active page.
    pub number: usize,
    pub total_pages: usize,
    /// Size of the filtered set across all pages.
    pub total_matches: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl UserPage {
    /// Page numbers to render as direct-jump buttons.
    pub fn numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Loaded(users) => {
                self.load = LoadState::Loaded(users);
                self.current_page = 1;
            }
            Action::LoadFailed(message) => {
                self.load = LoadState::Failed(message);
                self.current_page = 1;
            }
            Action::Search(term) => {
                self.search_term = term;
                self.current_page = 1;
            }
            Action::ClearSearch => {
                self.search_term.clear();
                self.current_page = 1;
            }
            Action::PreviousPage => {
                if self.current_page > 1 {
                    self.current_page -= 1;
                }
            }
            Action::NextPage => {
                if self.current_page < self.total_pages() {
                    self.current_page += 1;
                }
            }
            Action::GoToPage(page) => {
                if (1..=self.total_pages()).contains(&page) {
                    self.current_page = page;
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// The failure message when the collection request failed.
    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded users, empty while loading or after a failure.
    pub fn users(&self) -> &[UserRecord] {
        match &self.load {
            LoadState::Loaded(users) => users,
            _ => &[],
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Users matching the search term.
    pub fn filtered_users(&self) -> Vec<&UserRecord> {
        filter_users(self.users(), &self.search_term)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_users().len(), USERS_PER_PAGE)
    }

    /// Snapshot of the active page, computed from the current inputs.
    pub fn page(&self) -> UserPage {
        let filtered = self.filtered_users();
        let pages = total_pages(filtered.len(), USERS_PER_PAGE);
        UserPage {
            users: page_window(&filtered, self.current_page, USERS_PER_PAGE)
                .iter()
                .map(|user| (*user).clone())
                .collect(),
            number: self.current_page,
            total_pages: pages,
            total_matches: filtered.len(),
            has_previous: self.current_page > 1,
            has_next: self.current_page < pages,
        }
    }
}
