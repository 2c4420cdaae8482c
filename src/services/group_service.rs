use serde_json::json;

use crate::models::Group;
use crate::services::http;

pub async fn get_all() -> Result<Vec<Group>, String> {
    let response = http::get("/api/groups/")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<Group>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn create(name: &str) -> Result<Group, String> {
    let response = http::post("/api/groups/create/")
        .json(&json!({ "name": name }))
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
        .json::<Group>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn update(id: i64, name: &str) -> Result<Group, String> {
    let response = http::put(&format!("/api/groups/{}/update/", id))
        .json(&json!({ "name": name }))
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
        .json::<Group>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn delete(id: i64) -> Result<(), String> {
    let response = http::delete(&format!("/api/groups/{}/delete/", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    Ok(())
}
