//! Client-related types shared between the REST client and the app core
//!
//! Request/response DTOs for the auth and directory endpoints. Wire names
//! are the API's camelCase.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: Role,
}

/// Authenticated actor context: bearer token plus identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: SessionUser,
}

/// `GET /auth/me` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: SessionUser,
}

/// `PUT /auth/me` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

/// `PUT /auth/password` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// List envelope (`{ "data": [...] }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPayload<T> {
    pub data: Vec<T>,
}

/// Single-entity envelope (`{ "data": ..., "tempPassword": ... }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPayload<T> {
    pub data: T,
    /// Returned once, on user creation only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_password: Option<String>,
}
