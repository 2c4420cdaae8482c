use crate::models::{ChangePasswordRequest, User, UserPayload};
use crate::services::http;

pub async fn get_all() -> Result<Vec<User>, String> {
    let response = http::get("/api/users/")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<User>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn get_by_id(id: i64) -> Result<User, String> {
    let response = http::get(&format!("/api/users/{}/get-user/", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<User>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn create(payload: &UserPayload) -> Result<User, String> {
    let response = http::post("/api/users/create/")
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP {}: {}", status, error_text));
    }

    response
        .json::<User>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn update(id: i64, payload: &UserPayload) -> Result<User, String> {
    let response = http::put(&format!("/api/users/{}/update/", id))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP {}: {}", status, error_text));
    }

    response
        .json::<User>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn delete(id: i64) -> Result<(), String> {
    let response = http::delete(&format!("/api/users/{}/delete", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    Ok(())
}

pub async fn current() -> Result<User, String> {
    let response = http::get("/api/users/me/")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<User>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn change_password(request_body: &ChangePasswordRequest) -> Result<(), String> {
    let response = http::post("/api/users/change-password/")
        .json(request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP {}: {}", status, error_text));
    }

    Ok(())
}
