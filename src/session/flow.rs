use crate::models::{ActivityType, Company, CompanyUser, User, UserActivity};
use crate::session::error::SessionError;
use crate::session::gateway::{KeyValueStorage, SessionGateway};
use crate::session::resolver::{self, MembershipClass};
use crate::session::store::Session;
use crate::utils::constants::{
    SESSION_STORAGE_KEYS, STORAGE_KEY_COMPANIES, STORAGE_KEY_REFRESH_TOKEN,
    STORAGE_KEY_SELECTED_COMPANY, STORAGE_KEY_TOKEN, STORAGE_KEY_USER, STORAGE_KEY_USERNAME,
};

/// Orquesta el ciclo de vida de la sesión contra el gateway y el storage
/// inyectados. No guarda estado propio: cada operación devuelve la sesión
/// resultante completa.
pub struct SessionFlow<G, S> {
    gateway: G,
    storage: S,
}

impl<G: SessionGateway, S: KeyValueStorage> SessionFlow<G, S> {
    pub fn new(gateway: G, storage: S) -> Self {
        Self { gateway, storage }
    }

    /// Restaura la sesión persistida al arrancar. Si no hay token queda sin
    /// autenticar; si el token no valida (o cualquier paso crítico falla) se
    /// limpia todo: nunca queda un estado a medio autenticar.
    pub async fn bootstrap(&self) -> Session {
        let Some(token) = self.storage.get(STORAGE_KEY_TOKEN) else {
            return Session::default();
        };
        let username = self.storage.get(STORAGE_KEY_USERNAME);

        if !self.gateway.verify_token(&token).await {
            if let Some(ref username) = username {
                self.log_activity(username, ActivityType::TokenValidationFailed, "Token inválido")
                    .await;
            }
            return self.clear();
        }

        self.gateway.set_bearer(Some(&token));

        let user = match username {
            Some(ref username) => self.fetch_profile(username).await,
            None => None,
        };
        let (companies, selected_company) = match user {
            Some(ref user) => self.resolve_memberships(user).await,
            None => (Vec::new(), None),
        };

        if let Some(ref username) = username {
            self.log_activity(username, ActivityType::TokenValidation, "Token validado exitosamente")
                .await;
        }

        self.gateway
            .set_active_company(selected_company.as_ref().map(|c| c.id));

        Session {
            token: Some(token),
            is_authenticated: true,
            user,
            companies,
            selected_company,
        }
    }

    /// Login con credenciales. En el fallo se intenta registrar el evento
    /// `failed_login` y se re-lanza el error original al formulario.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, SessionError> {
        let tokens = match self.gateway.login(username, password).await {
            Ok(tokens) => tokens,
            Err(error) => {
                self.log_activity(
                    username,
                    ActivityType::FailedLogin,
                    "Intento fallido de inicio de sesión",
                )
                .await;
                return Err(SessionError::Authentication(error));
            }
        };

        self.storage.set(STORAGE_KEY_TOKEN, &tokens.access);
        self.storage.set(STORAGE_KEY_REFRESH_TOKEN, &tokens.refresh);
        self.storage.set(STORAGE_KEY_USERNAME, username);
        self.gateway.set_bearer(Some(&tokens.access));

        let user = self.fetch_profile(username).await;
        let (companies, selected_company) = match user {
            Some(ref user) => self.resolve_memberships(user).await,
            None => (Vec::new(), None),
        };

        self.gateway
            .set_active_company(selected_company.as_ref().map(|c| c.id));
        self.log_activity(username, ActivityType::Login, "Inicio de sesión exitoso")
            .await;

        Ok(Session {
            token: Some(tokens.access),
            is_authenticated: true,
            user,
            companies,
            selected_company,
        })
    }

    /// Cierra la sesión. El evento de auditoría es best-effort: nada puede
    /// impedir la limpieza del estado local.
    pub async fn logout(&self, session: &Session) -> Session {
        if let Some(user) = &session.user {
            self.log_activity(&user.username, ActivityType::Logout, "Cierre de sesión")
                .await;
        }
        self.clear()
    }

    /// Cambio manual de empresa activa desde el header.
    pub fn select_company(&self, session: &Session, company: Company) -> Session {
        self.storage.set(
            STORAGE_KEY_SELECTED_COMPANY,
            &serde_json::to_string(&company).unwrap_or_default(),
        );
        self.gateway.set_active_company(Some(company.id));

        let mut next = session.clone();
        next.selected_company = Some(company);
        next
    }

    async fn fetch_profile(&self, username: &str) -> Option<User> {
        match self.gateway.fetch_user(username).await {
            Ok(Some(user)) => {
                self.storage
                    .set(STORAGE_KEY_USER, &serde_json::to_string(&user).unwrap_or_default());
                self.log_activity(
                    &user.username,
                    ActivityType::ProfileFetch,
                    "Usuario obtuvo información de perfil",
                )
                .await;
                Some(user)
            }
            Ok(None) => {
                log::warn!("Usuario {} no aparece en el listado", username);
                None
            }
            Err(error) => {
                log::error!("Error al obtener información del usuario: {}", error);
                self.log_activity(
                    username,
                    ActivityType::ProfileFetchFailed,
                    "Error al obtener información del perfil",
                )
                .await;
                None
            }
        }
    }

    /// Resuelve el alcance de empresas según la clase del usuario. Un fallo
    /// deja la lista vacía y la sesión sigue autenticada.
    async fn resolve_memberships(&self, user: &User) -> (Vec<CompanyUser>, Option<Company>) {
        let fetched = match MembershipClass::of(user) {
            MembershipClass::Superuser | MembershipClass::SystemAdmin => self
                .gateway
                .list_companies()
                .await
                .map(|companies| resolver::synthesize_admin_memberships(user, companies)),
            MembershipClass::Standard => self.gateway.user_companies(user.id).await,
        };

        let memberships = match fetched {
            Ok(memberships) => memberships,
            Err(error) => {
                log::error!("Error resolviendo empresas del usuario: {}", error);
                Vec::new()
            }
        };

        self.storage.set(
            STORAGE_KEY_COMPANIES,
            &serde_json::to_string(&memberships).unwrap_or_default(),
        );

        let stored = self
            .storage
            .get(STORAGE_KEY_SELECTED_COMPANY)
            .and_then(|raw| serde_json::from_str::<Company>(&raw).ok());
        let selected = resolver::effective_selection(stored, &memberships);

        match &selected {
            Some(company) => self.storage.set(
                STORAGE_KEY_SELECTED_COMPANY,
                &serde_json::to_string(company).unwrap_or_default(),
            ),
            None => self.storage.remove(STORAGE_KEY_SELECTED_COMPANY),
        }

        (memberships, selected)
    }

    fn clear(&self) -> Session {
        for key in SESSION_STORAGE_KEYS {
            self.storage.remove(key);
        }
        self.gateway.set_bearer(None);
        self.gateway.set_active_company(None);
        Session::default()
    }

    /// Evento de auditoría best-effort: el fallo queda solo en consola.
    async fn log_activity(&self, username: &str, activity_type: ActivityType, details: &str) {
        let activity = UserActivity {
            username: username.to_string(),
            activity_type,
            details: details.to_string(),
        };
        if let Err(error) = self.gateway.record_activity(&activity).await {
            log::error!("Error registrando actividad de usuario: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use crate::models::{CompanyRole, LoginResponse};

    #[derive(Default)]
    struct MockState {
        valid_tokens: Vec<String>,
        login_response: Option<Result<LoginResponse, String>>,
        users: Vec<User>,
        companies: Vec<Company>,
        companies_fail: bool,
        memberships: Vec<CompanyUser>,
        activities: Vec<UserActivity>,
        activity_fails: bool,
        bearer: Option<String>,
        active_company: Option<i64>,
    }

    #[derive(Clone, Default)]
    struct MockGateway {
        state: Rc<RefCell<MockState>>,
    }

    #[async_trait(?Send)]
    impl SessionGateway for MockGateway {
        async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse, String> {
            self.state
                .borrow()
                .login_response
                .clone()
                .unwrap_or_else(|| Err("login sin configurar".to_string()))
        }

        async fn verify_token(&self, token: &str) -> bool {
            self.state.borrow().valid_tokens.iter().any(|t| t == token)
        }

        async fn fetch_user(&self, username: &str) -> Result<Option<User>, String> {
            Ok(self
                .state
                .borrow()
                .users
                .iter()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn list_companies(&self) -> Result<Vec<Company>, String> {
            let state = self.state.borrow();
            if state.companies_fail {
                Err("HTTP 500: error interno".to_string())
            } else {
                Ok(state.companies.clone())
            }
        }

        async fn user_companies(&self, _user_id: i64) -> Result<Vec<CompanyUser>, String> {
            Ok(self.state.borrow().memberships.clone())
        }

        async fn record_activity(&self, activity: &UserActivity) -> Result<(), String> {
            let mut state = self.state.borrow_mut();
            state.activities.push(activity.clone());
            if state.activity_fails {
                Err("HTTP 503: servicio de auditoría caído".to_string())
            } else {
                Ok(())
            }
        }

        fn set_bearer(&self, token: Option<&str>) {
            self.state.borrow_mut().bearer = token.map(|t| t.to_string());
        }

        fn set_active_company(&self, company_id: Option<i64>) {
            self.state.borrow_mut().active_company = company_id;
        }
    }

    #[derive(Clone, Default)]
    struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    fn sample_user(username: &str, is_superuser: bool, groups: &[&str]) -> User {
        User {
            id: 42,
            username: username.to_string(),
            email: format!("{}@moonbar.app", username),
            first_name: "Alice".to_string(),
            last_name: "Soto".to_string(),
            is_active: true,
            date_joined: "2023-01-10T00:00:00Z".to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            is_superuser,
            is_system_admin: false,
        }
    }

    fn sample_company(id: i64, name: &str) -> Company {
        Company {
            id,
            name: name.to_string(),
            business_name: format!("{} SpA", name),
            rut: "76.543.210-K".to_string(),
            email: format!("contacto@{}.cl", name.to_lowercase()),
            phone: "+56 9 1234 5678".to_string(),
            address: "Av. Principal 123".to_string(),
            is_active: true,
            website: None,
            description: None,
            created_at: "2023-05-01T12:00:00Z".to_string(),
            updated_at: "2023-05-01T12:00:00Z".to_string(),
            modules: None,
        }
    }

    fn sample_membership(company: Company, username: &str) -> CompanyUser {
        CompanyUser {
            id: company.id + 100,
            username: username.to_string(),
            full_name: "Alice Soto".to_string(),
            role: CompanyRole::Staff,
            is_company_admin: false,
            is_active: true,
            created_at: company.created_at.clone(),
            company,
        }
    }

    fn flow_with(gateway: &MockGateway, storage: &MemoryStorage) -> SessionFlow<MockGateway, MemoryStorage> {
        SessionFlow::new(gateway.clone(), storage.clone())
    }

    fn tokens(access: &str) -> LoginResponse {
        LoginResponse { access: access.to_string(), refresh: format!("{}-refresh", access) }
    }

    #[test]
    fn bootstrap_without_token_stays_unauthenticated() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();

        let session = block_on(flow_with(&gateway, &storage).bootstrap());

        assert_eq!(session, Session::default());
        assert!(gateway.state.borrow().activities.is_empty());
    }

    #[test]
    fn bootstrap_with_valid_token_authenticates_without_interaction() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        {
            let mut state = gateway.state.borrow_mut();
            state.valid_tokens.push("tok-1".to_string());
            state.users.push(sample_user("alice", false, &["Ventas"]));
            state.memberships.push(sample_membership(sample_company(1, "Andes"), "alice"));
        }
        storage.set(STORAGE_KEY_TOKEN, "tok-1");
        storage.set(STORAGE_KEY_USERNAME, "alice");

        let session = block_on(flow_with(&gateway, &storage).bootstrap());

        assert!(session.is_authenticated);
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert_eq!(session.companies.len(), 1);
        assert_eq!(gateway.state.borrow().bearer.as_deref(), Some("tok-1"));
        let kinds: Vec<ActivityType> = gateway
            .state
            .borrow()
            .activities
            .iter()
            .map(|a| a.activity_type)
            .collect();
        assert!(kinds.contains(&ActivityType::TokenValidation));
        assert!(kinds.contains(&ActivityType::ProfileFetch));
    }

    #[test]
    fn bootstrap_is_idempotent_with_still_valid_token() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        {
            let mut state = gateway.state.borrow_mut();
            state.valid_tokens.push("tok-1".to_string());
            state.users.push(sample_user("alice", false, &[]));
            state.memberships.push(sample_membership(sample_company(1, "Andes"), "alice"));
        }
        storage.set(STORAGE_KEY_TOKEN, "tok-1");
        storage.set(STORAGE_KEY_USERNAME, "alice");

        let first = block_on(flow_with(&gateway, &storage).bootstrap());
        let second = block_on(flow_with(&gateway, &storage).bootstrap());

        assert_eq!(first, second);
        assert!(second.is_authenticated);
    }

    #[test]
    fn bootstrap_with_rejected_token_equals_full_logout() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        storage.set(STORAGE_KEY_TOKEN, "tok-viejo");
        storage.set(STORAGE_KEY_USERNAME, "alice");
        storage.set(STORAGE_KEY_REFRESH_TOKEN, "refresh-viejo");
        storage.set(STORAGE_KEY_SELECTED_COMPANY, "{}");

        let session = block_on(flow_with(&gateway, &storage).bootstrap());

        assert_eq!(session, Session::default());
        for key in SESSION_STORAGE_KEYS {
            assert!(storage.get(key).is_none(), "la clave {} debía eliminarse", key);
        }
        assert_eq!(gateway.state.borrow().bearer, None);
        let kinds: Vec<ActivityType> = gateway
            .state
            .borrow()
            .activities
            .iter()
            .map(|a| a.activity_type)
            .collect();
        assert_eq!(kinds, vec![ActivityType::TokenValidationFailed]);
    }

    #[test]
    fn login_success_attaches_bearer_and_persists() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        {
            let mut state = gateway.state.borrow_mut();
            state.login_response = Some(Ok(tokens("tok-nuevo")));
            state.users.push(sample_user("alice", false, &[]));
            state.memberships.push(sample_membership(sample_company(1, "Andes"), "alice"));
        }

        let session = block_on(flow_with(&gateway, &storage).login("alice", "secreta")).unwrap();

        assert!(session.is_authenticated);
        assert_eq!(gateway.state.borrow().bearer.as_deref(), Some("tok-nuevo"));
        assert_eq!(storage.get(STORAGE_KEY_TOKEN).as_deref(), Some("tok-nuevo"));
        assert_eq!(storage.get(STORAGE_KEY_REFRESH_TOKEN).as_deref(), Some("tok-nuevo-refresh"));
        assert_eq!(storage.get(STORAGE_KEY_USERNAME).as_deref(), Some("alice"));
        assert!(storage.get(STORAGE_KEY_USER).is_some());
        let kinds: Vec<ActivityType> = gateway
            .state
            .borrow()
            .activities
            .iter()
            .map(|a| a.activity_type)
            .collect();
        assert!(kinds.contains(&ActivityType::Login));
    }

    #[test]
    fn failed_login_rethrows_and_attempts_activity_log() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        gateway.state.borrow_mut().login_response =
            Some(Err("HTTP 401: credenciales inválidas".to_string()));
        // El endpoint de auditoría también falla: no debe tapar el error real
        gateway.state.borrow_mut().activity_fails = true;

        let result = block_on(flow_with(&gateway, &storage).login("alice", "wrong"));

        let error = result.unwrap_err();
        assert!(matches!(error, SessionError::Authentication(_)));
        assert!(error.to_string().contains("401"));
        assert!(storage.get(STORAGE_KEY_TOKEN).is_none());

        let state = gateway.state.borrow();
        assert_eq!(state.activities.len(), 1);
        assert_eq!(state.activities[0].activity_type, ActivityType::FailedLogin);
        assert_eq!(state.activities[0].username, "alice");
    }

    #[test]
    fn superuser_resolution_synthesizes_admin_membership_per_company() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        {
            let mut state = gateway.state.borrow_mut();
            state.login_response = Some(Ok(tokens("tok-su")));
            state.users.push(sample_user("root", true, &[]));
            state.companies = vec![
                sample_company(1, "Andes"),
                sample_company(2, "Pacifico"),
                sample_company(3, "Austral"),
            ];
            // Membresías explícitas que NO deben usarse para la clase admin
            state.memberships.push(sample_membership(sample_company(9, "Otra"), "root"));
        }

        let session = block_on(flow_with(&gateway, &storage).login("root", "secreta")).unwrap();

        assert_eq!(session.companies.len(), 3);
        assert!(session.companies.iter().all(|m| m.is_company_admin));
        assert!(session.companies.iter().all(|m| m.role == CompanyRole::Admin));
        assert_eq!(session.selected_company.as_ref().map(|c| c.id), Some(1));
    }

    #[test]
    fn regular_user_resolution_uses_fetched_memberships_verbatim() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        let memberships = vec![
            sample_membership(sample_company(5, "Andes"), "alice"),
            sample_membership(sample_company(7, "Pacifico"), "alice"),
        ];
        {
            let mut state = gateway.state.borrow_mut();
            state.login_response = Some(Ok(tokens("tok-std")));
            state.users.push(sample_user("alice", false, &["Ventas"]));
            state.companies = vec![sample_company(1, "NoDebeAparecer")];
            state.memberships = memberships.clone();
        }

        let session = block_on(flow_with(&gateway, &storage).login("alice", "secreta")).unwrap();

        assert_eq!(session.companies, memberships);
    }

    #[test]
    fn company_resolution_failure_keeps_session_authenticated() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        {
            let mut state = gateway.state.borrow_mut();
            state.login_response = Some(Ok(tokens("tok-su")));
            state.users.push(sample_user("root", true, &[]));
            state.companies_fail = true;
        }

        let session = block_on(flow_with(&gateway, &storage).login("root", "secreta")).unwrap();

        assert!(session.is_authenticated);
        assert!(session.companies.is_empty());
        assert!(session.selected_company.is_none());
    }

    #[test]
    fn stale_selected_company_is_pruned_on_login() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        {
            let mut state = gateway.state.borrow_mut();
            state.login_response = Some(Ok(tokens("tok-std")));
            state.users.push(sample_user("alice", false, &[]));
            state.memberships = vec![sample_membership(sample_company(5, "Andes"), "alice")];
        }
        // Selección persistida de una empresa a la que ya no pertenece
        storage.set(
            STORAGE_KEY_SELECTED_COMPANY,
            &serde_json::to_string(&sample_company(99, "Extinta")).unwrap(),
        );

        let session = block_on(flow_with(&gateway, &storage).login("alice", "secreta")).unwrap();

        assert_eq!(session.selected_company.as_ref().map(|c| c.id), Some(5));
        let persisted: Company =
            serde_json::from_str(&storage.get(STORAGE_KEY_SELECTED_COMPANY).unwrap()).unwrap();
        assert_eq!(persisted.id, 5);
        assert_eq!(gateway.state.borrow().active_company, Some(5));
    }

    #[test]
    fn logout_clears_state_storage_and_defaults() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        {
            let mut state = gateway.state.borrow_mut();
            state.login_response = Some(Ok(tokens("tok-1")));
            state.users.push(sample_user("alice", false, &[]));
            state.memberships = vec![sample_membership(sample_company(1, "Andes"), "alice")];
        }
        let flow = flow_with(&gateway, &storage);
        let session = block_on(flow.login("alice", "secreta")).unwrap();
        assert!(session.is_authenticated);

        let cleared = block_on(flow.logout(&session));

        assert!(!cleared.is_authenticated);
        assert!(cleared.user.is_none());
        assert!(cleared.companies.is_empty());
        for key in SESSION_STORAGE_KEYS {
            assert!(storage.get(key).is_none(), "la clave {} debía eliminarse", key);
        }
        let state = gateway.state.borrow();
        assert_eq!(state.bearer, None);
        assert_eq!(state.active_company, None);
        assert!(state
            .activities
            .iter()
            .any(|a| a.activity_type == ActivityType::Logout));
    }

    #[test]
    fn logout_with_failing_activity_still_clears() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        storage.set(STORAGE_KEY_TOKEN, "tok-1");
        gateway.state.borrow_mut().activity_fails = true;

        let session = Session {
            token: Some("tok-1".to_string()),
            is_authenticated: true,
            user: Some(sample_user("alice", false, &[])),
            companies: Vec::new(),
            selected_company: None,
        };

        let cleared = block_on(flow_with(&gateway, &storage).logout(&session));

        assert_eq!(cleared, Session::default());
        assert!(storage.get(STORAGE_KEY_TOKEN).is_none());
    }

    #[test]
    fn select_company_persists_and_updates_default_header() {
        let gateway = MockGateway::default();
        let storage = MemoryStorage::default();
        let session = Session {
            token: Some("tok-1".to_string()),
            is_authenticated: true,
            user: Some(sample_user("alice", false, &[])),
            companies: vec![sample_membership(sample_company(2, "Pacifico"), "alice")],
            selected_company: None,
        };

        let next =
            flow_with(&gateway, &storage).select_company(&session, sample_company(2, "Pacifico"));

        assert_eq!(next.selected_company.as_ref().map(|c| c.id), Some(2));
        assert_eq!(gateway.state.borrow().active_company, Some(2));
        assert!(storage.get(STORAGE_KEY_SELECTED_COMPANY).is_some());
    }
}
