//! Signup and login.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use database::{user, validation, DatabaseError};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{hash_password, verify_password};
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Signup body. Missing fields deserialize as empty and fail validation.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public part of a user record.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Register a user and sign them in.
pub async fn signup(
    State(state): State<AppState>,
    body: std::result::Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let Json(req) = body?;
    let name = req.name.trim();
    let email = req.email.trim();

    validation::validate_name(name)?;
    validation::validate_email(email)?;
    validation::validate_password(&req.password)?;

    let password_hash = hash_password(req.password, state.settings.bcrypt_cost).await?;
    let user = user::create_user(state.db.pool(), name, email, &password_hash).await?;
    let token = state.tokens.issue(&user.email, &user.name)?;

    info!(email = %user.email, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserInfo {
                name: user.name,
                email: user.email,
            },
        }),
    ))
}

/// Exchange email and password for a token.
pub async fn login(
    State(state): State<AppState>,
    body: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>> {
    let Json(req) = body?;
    let email = req.email.trim();

    if email.is_empty() {
        return Err(ApiError::Validation("email is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(ApiError::Validation("password is required".to_string()));
    }

    let user = match user::get_user(state.db.pool(), email).await {
        Ok(user) => user,
        Err(DatabaseError::NotFound { .. }) => return Err(ApiError::InvalidCredentials),
        Err(err) => return Err(err.into()),
    };

    if !verify_password(req.password, user.password_hash.clone()).await? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(&user.email, &user.name)?;
    info!(email = %user.email, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user: UserInfo {
            name: user.name,
            email: user.email,
        },
    }))
}
