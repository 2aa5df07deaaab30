/// Account API routes
use crate::{api::ApiJson, error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{extract::State, Json};
use quill_core::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    pub error: bool,
    pub message: String,
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub error: bool,
    pub message: String,
    pub email: String,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
    pub message: String,
}

/// POST /create-account
pub async fn create_account(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<CreateAccountRequest>,
) -> Result<Json<CreateAccountResponse>> {
    let session = app_state
        .accounts
        .sign_up(&req.full_name, &req.email, &req.password)
        .await?;

    Ok(Json(CreateAccountResponse {
        error: false,
        message: "Account created successfully".to_string(),
        access_token: session.access_token,
        user: session.user,
    }))
}

/// POST /login
pub async fn login(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let session = app_state.accounts.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        error: false,
        message: "Login successful".to_string(),
        email: session.user.email,
        access_token: session.access_token,
    }))
}

/// GET /Get-User
pub async fn get_user(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ProfileResponse>> {
    let user = app_state.accounts.profile(auth.claims()).await?;

    Ok(Json(ProfileResponse {
        user,
        message: "User Is Present".to_string(),
    }))
}
