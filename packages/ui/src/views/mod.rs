mod user_list;
pub use user_list::UserListView;

mod user_detail;
pub use user_detail::UserDetailView;
