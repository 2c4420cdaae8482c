// ============================================================================
// CONTEXTO DE AUTENTICACIÓN
// ============================================================================
// Provider que construye el SessionFlow productivo y comparte la sesión con
// todas las pantallas vía Context API de Yew. El bootstrap corre una sola vez
// al montar; login/logout/select_company son los únicos mutadores.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::Company;
use crate::session::{BrowserStorage, HttpGateway, Session, SessionFlow};

fn session_flow() -> SessionFlow<HttpGateway, BrowserStorage> {
    SessionFlow::new(HttpGateway, BrowserStorage)
}

#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub session: Session,
    /// Bootstrap en vuelo: la app muestra pantalla de arranque mientras tanto
    pub checking: bool,
    /// Último error de autenticación, para el formulario de login
    pub login_error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub select_company: Callback<Company>,
}

impl UseAuthHandle {
    pub fn session(&self) -> &Session {
        &self.state.session
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_state(|| AuthState {
        session: Session::default(),
        checking: true,
        login_error: None,
    });

    // Restaurar sesión persistida al montar
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let session = session_flow().bootstrap().await;
                if session.is_authenticated {
                    log::info!("✅ Sesión restaurada: {}", session.username().unwrap_or("?"));
                } else {
                    log::info!("ℹ️ Sin sesión persistida");
                }
                state.set(AuthState { session, checking: false, login_error: None });
            });
            || ()
        });
    }

    let login = {
        let state = state.clone();
        Callback::from(move |(username, password): (String, String)| {
            let state = state.clone();
            spawn_local(async move {
                match session_flow().login(&username, &password).await {
                    Ok(session) => {
                        log::info!("✅ Login exitoso: {}", username);
                        state.set(AuthState { session, checking: false, login_error: None });
                    }
                    Err(error) => {
                        log::error!("❌ Login fallido: {}", error);
                        let mut next = (*state).clone();
                        next.login_error = Some(error.to_string());
                        state.set(next);
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            let state = state.clone();
            spawn_local(async move {
                let current = state.session.clone();
                let session = session_flow().logout(&current).await;
                log::info!("👋 Logout");
                state.set(AuthState { session, checking: false, login_error: None });
            });
        })
    };

    let select_company = {
        let state = state.clone();
        Callback::from(move |company: Company| {
            log::info!("✅ Empresa seleccionada: {}", company.name);
            let session = session_flow().select_company(&state.session, company);
            let mut next = (*state).clone();
            next.session = session;
            state.set(next);
        })
    };

    let handle = UseAuthHandle { state, login, logout, select_company };

    html! {
        <ContextProvider<UseAuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("use_auth debe ser usado dentro de un AuthProvider")
}
