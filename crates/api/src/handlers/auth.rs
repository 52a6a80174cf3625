//! Handlers for the `/auth` resource: register, login, current profile.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use skillswap_core::error::CoreError;
use skillswap_db::models::search::UserWithSkills;
use skillswap_db::models::user::{CreateUser, UserResponse};
use skillswap_db::repositories::UserRepo;
use validator::ValidateEmail;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::users::build_profiles;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub location: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication payload returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthData {
    pub user: UserResponse,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account and return the new profile plus a signed token.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthData>>)> {
    // 1. Validate the email shape, name, and password strength.
    if !input.email.validate_email() {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid email format".into(),
        )));
    }
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name is required".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(CoreError::Validation)?;

    // 2. Reject duplicate emails before doing any hashing work.
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists with this email".into(),
        )));
    }

    // 3. Hash the password and create the user.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            password_hash,
            name: Some(input.name),
            location: input.location,
        },
    )
    .await?;

    // 4. Issue a token for the new account.
    let token = generate_token(user.id, &user.email, user.name.as_deref(), &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            AuthData {
                user: user.into(),
                token,
            },
            "User registered successfully",
        )),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email and password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthData>>> {
    // 1. Look up the account. An unknown email reads the same as a wrong
    //    password so the endpoint does not leak which emails exist.
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    // 2. Deactivated accounts cannot sign in.
    if !user.is_active {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Account is deactivated".into(),
        )));
    }

    // 3. Verify the password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    // 4. Issue a fresh token.
    let token = generate_token(user.id, &user.email, user.name.as_deref(), &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(ApiResponse::with_message(
        AuthData {
            user: user.into(),
            token,
        },
        "Login successful",
    )))
}

/// GET /api/v1/auth/me
///
/// Full profile (skills, availability, rating counts) for the caller.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<UserWithSkills>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.id,
        }))?;

    let mut profiles = build_profiles(&state.pool, vec![user]).await?;
    Ok(Json(ApiResponse::new(profiles.remove(0))))
}
