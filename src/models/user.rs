use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub date_joined: String,
    /// Nombres de grupos/perfiles asignados al usuario
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_system_admin: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

/// Cuerpo de creación/actualización de usuarios. El password solo viaja
/// cuando se está creando la cuenta.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UserPayload {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub groups: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
