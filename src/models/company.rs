use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub business_name: String,
    pub rut: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub is_active: bool,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub modules: Option<Vec<CompanyModule>>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CompanyModule {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CompanyRole {
    Admin,
    Manager,
    Staff,
}

impl CompanyRole {
    pub fn label(&self) -> &'static str {
        match self {
            CompanyRole::Admin => "Administrador",
            CompanyRole::Manager => "Gerente",
            CompanyRole::Staff => "Colaborador",
        }
    }
}

/// Relación usuario-empresa con el rol dentro del tenant. Para usuarios de
/// clase administradora se sintetiza en el cliente; para el resto viene del
/// endpoint de membresías.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CompanyUser {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub company: Company,
    pub role: CompanyRole,
    pub is_company_admin: bool,
    pub is_active: bool,
    pub created_at: String,
}

/// Cuerpo de creación/actualización de empresas.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct CompanyPayload {
    pub name: String,
    pub business_name: String,
    pub rut: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}
