use crate::models::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, VerifyRequest};
use crate::services::http;

/// Intercambia credenciales por el par access/refresh
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    let request_body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = http::post("/api/token/")
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Intercambia el refresh token por un access nuevo
pub async fn refresh_token(refresh: &str) -> Result<RefreshResponse, String> {
    let request_body = RefreshRequest { refresh: refresh.to_string() };

    let response = http::post("/api/token/refresh/")
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Cualquier respuesta no-2xx (o error de red) cuenta como token inválido.
pub async fn validate_token(token: &str) -> bool {
    let request_body = VerifyRequest { token: token.to_string() };

    let request = match http::post("/api/token/verify/").json(&request_body) {
        Ok(request) => request,
        Err(_) => return false,
    };

    match request.send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}
