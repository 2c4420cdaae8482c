// ============================================================================
// CAPA HTTP - cabeceras por defecto de todas las llamadas salientes
// ============================================================================
// El token bearer y la empresa activa se guardan en thread_local (wasm es
// mono-hilo) y se aplican a cada request, igual que los "defaults" de un
// cliente HTTP clásico. Los únicos escritores son el flujo de sesión y el
// selector de empresa.
// ============================================================================

use std::cell::RefCell;

use gloo_net::http::{Request, RequestBuilder};

use crate::config::CONFIG;

thread_local! {
    static BEARER_TOKEN: RefCell<Option<String>> = RefCell::new(None);
    static ACTIVE_COMPANY: RefCell<Option<i64>> = RefCell::new(None);
}

pub fn set_bearer_token(token: Option<&str>) {
    BEARER_TOKEN.with(|cell| {
        *cell.borrow_mut() = token.map(|t| t.to_string());
    });
}

pub fn bearer_token() -> Option<String> {
    BEARER_TOKEN.with(|cell| cell.borrow().clone())
}

pub fn set_active_company(company_id: Option<i64>) {
    ACTIVE_COMPANY.with(|cell| {
        *cell.borrow_mut() = company_id;
    });
}

pub fn active_company() -> Option<i64> {
    ACTIVE_COMPANY.with(|cell| *cell.borrow())
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", CONFIG.backend_url(), path)
}

fn with_defaults(builder: RequestBuilder) -> RequestBuilder {
    let builder = match bearer_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    };
    match active_company() {
        Some(id) => builder.header("X-Company-ID", &id.to_string()),
        None => builder,
    }
}

pub fn get(path: &str) -> RequestBuilder {
    with_defaults(Request::get(&api_url(path)))
}

pub fn post(path: &str) -> RequestBuilder {
    with_defaults(Request::post(&api_url(path)))
}

pub fn put(path: &str) -> RequestBuilder {
    with_defaults(Request::put(&api_url(path)))
}

pub fn patch(path: &str) -> RequestBuilder {
    with_defaults(Request::patch(&api_url(path)))
}

pub fn delete(path: &str) -> RequestBuilder {
    with_defaults(Request::delete(&api_url(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_default_round_trip() {
        set_bearer_token(Some("abc123"));
        assert_eq!(bearer_token().as_deref(), Some("abc123"));

        set_bearer_token(None);
        assert_eq!(bearer_token(), None);
    }

    #[test]
    fn active_company_round_trip() {
        set_active_company(Some(7));
        assert_eq!(active_company(), Some(7));

        set_active_company(None);
        assert_eq!(active_company(), None);
    }

    #[test]
    fn api_url_prefixes_backend() {
        let url = api_url("/api/users/");
        assert!(url.ends_with("/api/users/"));
        assert!(url.starts_with("http"));
    }
}
