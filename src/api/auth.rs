use super::{post_json, ApiError};
use crate::models::UserProfile;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login always carries a token; register may omit it, in which case the
/// user signs in separately.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl AuthResponse {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

pub async fn login_user(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post_json("/auth/login", request).await
}

pub async fn register_user(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    post_json("/auth/register", request).await
}
