pub mod auth_context;
pub mod loading_context;

pub use auth_context::{use_auth, AuthProvider, AuthState, UseAuthHandle};
pub use loading_context::{use_loading, LoadingProvider, UseLoadingHandle};
