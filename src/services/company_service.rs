use crate::models::{Company, CompanyModule, CompanyPayload, CompanyUser};
use crate::services::http;

/// Listar empresas
pub async fn get_all() -> Result<Vec<Company>, String> {
    let response = http::get("/api/companies/")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<Company>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn get_by_id(id: i64) -> Result<Company, String> {
    let response = http::get(&format!("/api/companies/{}/", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Company>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn create(payload: &CompanyPayload) -> Result<Company, String> {
    let response = http::post("/api/companies/")
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
        .json::<Company>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn update(id: i64, payload: &CompanyPayload) -> Result<Company, String> {
    let response = http::put(&format!("/api/companies/{}/", id))
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
        .json::<Company>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn delete(id: i64) -> Result<(), String> {
    let response = http::delete(&format!("/api/companies/{}/", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    Ok(())
}

/// Módulos habilitados para una empresa
pub async fn get_modules(company_id: i64) -> Result<Vec<CompanyModule>, String> {
    let response = http::get(&format!("/api/companies/{}/modules/", company_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<CompanyModule>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Usuarios de la empresa
pub async fn get_company_users(company_id: i64) -> Result<Vec<CompanyUser>, String> {
    let response = http::get(&format!("/api/companies/{}/users/", company_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<CompanyUser>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Membresías de un usuario concreto
pub async fn get_companies_for_user(user_id: i64) -> Result<Vec<CompanyUser>, String> {
    let response = http::get(&format!("/api/users/{}/companies/", user_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<CompanyUser>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
