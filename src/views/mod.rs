pub mod app;
pub mod companies;
pub mod home;
pub mod layout;
pub mod login;
pub mod products;
pub mod screen;
pub mod shared;
pub mod users;

pub use app::App;
pub use screen::Screen;
