mod admin_home;
pub use admin_home::AdminHome;

mod admin_user;
pub use admin_user::AdminUser;
