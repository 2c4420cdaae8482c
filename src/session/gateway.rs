use async_trait::async_trait;

use crate::models::{Company, CompanyUser, LoginResponse, User, UserActivity};
use crate::services::{activity_service, auth_service, company_service, http, user_service};
use crate::utils::storage;

/// Puerto hacia el backend que necesita el flujo de sesión. Los futures de
/// wasm no son Send, por eso el trait es `?Send`; en tests se implementa con
/// un doble en memoria.
#[async_trait(?Send)]
pub trait SessionGateway {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, String>;
    async fn verify_token(&self, token: &str) -> bool;
    /// Busca el usuario por username dentro del listado, como hace la API
    /// (no existe un endpoint de perfil por nombre).
    async fn fetch_user(&self, username: &str) -> Result<Option<User>, String>;
    async fn list_companies(&self) -> Result<Vec<Company>, String>;
    async fn user_companies(&self, user_id: i64) -> Result<Vec<CompanyUser>, String>;
    async fn record_activity(&self, activity: &UserActivity) -> Result<(), String>;

    /// Credencial bearer por defecto de las llamadas salientes.
    fn set_bearer(&self, token: Option<&str>);
    /// Cabecera de empresa activa (X-Company-ID) por defecto.
    fn set_active_company(&self, company_id: Option<i64>);
}

/// Implementación productiva sobre la capa de servicios HTTP.
#[derive(Clone, Copy, Default)]
pub struct HttpGateway;

#[async_trait(?Send)]
impl SessionGateway for HttpGateway {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, String> {
        auth_service::login(username, password).await
    }

    async fn verify_token(&self, token: &str) -> bool {
        auth_service::validate_token(token).await
    }

    async fn fetch_user(&self, username: &str) -> Result<Option<User>, String> {
        let users = user_service::get_all().await?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    async fn list_companies(&self) -> Result<Vec<Company>, String> {
        company_service::get_all().await
    }

    async fn user_companies(&self, user_id: i64) -> Result<Vec<CompanyUser>, String> {
        company_service::get_companies_for_user(user_id).await
    }

    async fn record_activity(&self, activity: &UserActivity) -> Result<(), String> {
        activity_service::record(activity).await
    }

    fn set_bearer(&self, token: Option<&str>) {
        http::set_bearer_token(token);
    }

    fn set_active_company(&self, company_id: Option<i64>) {
        http::set_active_company(company_id);
    }
}

/// Almacenamiento clave-valor persistente. Producción usa localStorage; los
/// tests usan un HashMap.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage::raw_from_storage(key)
    }

    fn set(&self, key: &str, value: &str) {
        storage::raw_to_storage(key, value);
    }

    fn remove(&self, key: &str) {
        let _ = storage::remove_from_storage(key);
    }
}
