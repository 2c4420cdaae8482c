use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RefreshResponse {
    pub access: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VerifyRequest {
    pub token: String,
}
