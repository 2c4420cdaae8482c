use crate::models::{ActivityLogEntry, UserActivity};
use crate::services::http;

/// Registra un evento de auditoría. El llamador decide si el error importa;
/// el flujo de sesión lo trata como best-effort.
pub async fn record(activity: &UserActivity) -> Result<(), String> {
    let response = http::post("/api/users/activity-logs/")
        .json(activity)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    Ok(())
}

/// Arma la query de consulta del registro de actividad.
pub fn log_query(days: u32, activity_type: Option<&str>, username: Option<&str>) -> String {
    let mut params = vec![format!("days={}", days)];
    if let Some(activity_type) = activity_type {
        if !activity_type.is_empty() {
            params.push(format!("activity_type={}", activity_type));
        }
    }
    if let Some(username) = username {
        let username = username.trim();
        if !username.is_empty() {
            params.push(format!("username={}", username));
        }
    }
    format!("?{}", params.join("&"))
}

pub async fn get_logs(
    days: u32,
    activity_type: Option<&str>,
    username: Option<&str>,
) -> Result<Vec<ActivityLogEntry>, String> {
    let path = format!("/api/users/activity-logs/{}", log_query(days, activity_type, username));
    let response = http::get(&path)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<ActivityLogEntry>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_query_always_carries_days() {
        assert_eq!(log_query(7, None, None), "?days=7");
    }

    #[test]
    fn log_query_with_filters() {
        assert_eq!(
            log_query(30, Some("failed_login"), Some("alice")),
            "?days=30&activity_type=failed_login&username=alice"
        );
        assert_eq!(log_query(7, Some(""), Some("  ")), "?days=7");
    }
}
