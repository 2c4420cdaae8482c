/// Claves de localStorage que persisten la sesión entre recargas.
/// logout() las elimina todas; no agregar claves de sesión fuera de esta lista.
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "refresh_token";
pub const STORAGE_KEY_USERNAME: &str = "username";
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_COMPANIES: &str = "companies";
pub const STORAGE_KEY_SELECTED_COMPANY: &str = "selectedCompany";

pub const SESSION_STORAGE_KEYS: [&str; 6] = [
    STORAGE_KEY_TOKEN,
    STORAGE_KEY_REFRESH_TOKEN,
    STORAGE_KEY_USERNAME,
    STORAGE_KEY_USER,
    STORAGE_KEY_COMPANIES,
    STORAGE_KEY_SELECTED_COMPANY,
];
