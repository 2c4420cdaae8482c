use serde::{Deserialize, Serialize};

/// Tipos de actividad que registra el flujo de sesión. Enum cerrado: el
/// backend rechaza valores fuera de su catálogo.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Login,
    FailedLogin,
    Logout,
    TokenValidation,
    TokenValidationFailed,
    ProfileFetch,
    ProfileFetchFailed,
}

impl ActivityType {
    pub const ALL: [ActivityType; 7] = [
        ActivityType::Login,
        ActivityType::FailedLogin,
        ActivityType::Logout,
        ActivityType::TokenValidation,
        ActivityType::TokenValidationFailed,
        ActivityType::ProfileFetch,
        ActivityType::ProfileFetchFailed,
    ];

    /// Valor tal como viaja por la API (query params y cuerpo del POST)
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Login => "login",
            ActivityType::FailedLogin => "failed_login",
            ActivityType::Logout => "logout",
            ActivityType::TokenValidation => "token_validation",
            ActivityType::TokenValidationFailed => "token_validation_failed",
            ActivityType::ProfileFetch => "profile_fetch",
            ActivityType::ProfileFetchFailed => "profile_fetch_failed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Login => "Inicio de sesión",
            ActivityType::FailedLogin => "Intento fallido de inicio de sesión",
            ActivityType::Logout => "Cierre de sesión",
            ActivityType::TokenValidation => "Token validado",
            ActivityType::TokenValidationFailed => "Token inválido",
            ActivityType::ProfileFetch => "Obtención de perfil",
            ActivityType::ProfileFetchFailed => "Error al obtener perfil",
        }
    }
}

/// Evento de auditoría que emite el cliente (best-effort).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserActivity {
    pub username: String,
    pub activity_type: ActivityType,
    pub details: String,
}

/// Registro tal como lo devuelve el endpoint de consulta. El tipo llega como
/// texto libre porque el backend maneja un catálogo más amplio que el del
/// cliente.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ActivityLogEntry {
    pub id: i64,
    pub username: String,
    pub activity_type: String,
    pub timestamp: String,
    pub details: String,
    #[serde(default)]
    pub ip_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_type_serializes_snake_case() {
        let json = serde_json::to_string(&ActivityType::FailedLogin).unwrap();
        assert_eq!(json, "\"failed_login\"");
    }

    #[test]
    fn as_str_matches_serde_representation() {
        for kind in ActivityType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
