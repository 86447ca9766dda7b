pub mod filter;
pub mod models;
pub mod pagination;
pub mod state;

pub use models::UserRecord;
pub use pagination::USERS_PER_PAGE;
pub use state::{Action, UserListState, UserPage};
