pub mod activity_log;
pub mod change_password;
pub mod group_management;
pub mod user_form;
pub mod user_management;

pub use activity_log::ActivityLogView;
pub use change_password::ChangePasswordView;
pub use group_management::GroupManagement;
pub use user_form::UserForm;
pub use user_management::UserManagement;
