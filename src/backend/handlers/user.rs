//! The account service boundary. Creation checks the username before
//! writing, updates re-check it for renames, deletes confirm existence
//! first so an absent row gets its own status instead of a server error.

use axum::extract::{Path, State};
use axum::Form;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use super::server_error;
use crate::auth;
use crate::backend::{ApiResponse, AppState};
use crate::database::db::queries::user::{self, UserChanges};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub discord_username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AddUserForm {
    pub discord_username: String,
    pub pin: String,
}

/// Absent fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateUserForm {
    pub discord_username: Option<String>,
    pub pin: Option<String>,
    pub balance: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct PatchUserForm {
    pub pin: Option<String>,
    pub balance: Option<Decimal>,
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> ApiResponse {
    let result = auth::authenticate(
        &state.db,
        &state.pin_secret,
        &form.discord_username,
        &form.password,
    )
    .await;

    match result {
        Ok(user) => ApiResponse::success(user),
        Err(AppError::Auth(_)) => {
            warn!("User|login: username or password is incorrect");
            ApiResponse::failure("Username or password is incorrect")
        }
        Err(err) => server_error("User|login", &err),
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    match user::get_by_id(&state.db, id).await {
        Ok(Some(user)) => ApiResponse::success(user),
        Ok(None) => {
            warn!("User|get_by_id: user not found");
            ApiResponse::failure("User not found")
        }
        Err(err) => server_error("User|get_by_id", &err),
    }
}

pub async fn get_all(State(state): State<AppState>) -> ApiResponse {
    match user::get_all(&state.db).await {
        Ok(users) if users.is_empty() => {
            warn!("User|get_all: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(users) => ApiResponse::success(users),
        Err(err) => server_error("User|get_all", &err),
    }
}

pub async fn add(State(state): State<AppState>, Form(form): Form<AddUserForm>) -> ApiResponse {
    // Pre-check for a friendlier message; the UNIQUE constraint is the
    // actual guarantee and surfaces as Duplicate when a concurrent insert
    // wins the race.
    match user::get_by_username(&state.db, &form.discord_username).await {
        Ok(Some(_)) => {
            warn!("User|add: user already exist");
            return ApiResponse::failure("User already exist");
        }
        Ok(None) => {}
        Err(err) => return server_error("User|add", &err),
    }

    let digest = auth::hash_pin(&state.pin_secret, &form.pin);
    match user::create(&state.db, &form.discord_username, &digest).await {
        Ok(created) => ApiResponse::success(created),
        Err(AppError::Duplicate) => {
            warn!("User|add: user already exist");
            ApiResponse::failure("User already exist")
        }
        Err(err) => server_error("User|add", &err),
    }
}

pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<UpdateUserForm>,
) -> ApiResponse {
    let existing = match user::get_by_id(&state.db, id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!("User|update_by_id: user does not exist");
            return ApiResponse::failure("User does not exist");
        }
        Err(err) => return server_error("User|update_by_id", &err),
    };

    // A rename must not take a username held by a different account.
    if let Some(new_name) = form.discord_username.as_deref() {
        if new_name != existing.discord_username {
            match user::get_by_username(&state.db, new_name).await {
                Ok(Some(_)) => {
                    warn!("User|update_by_id: username already exist");
                    return ApiResponse::failure("Username already exist");
                }
                Ok(None) => {}
                Err(err) => return server_error("User|update_by_id", &err),
            }
        }
    }

    let changes = UserChanges {
        discord_username: form.discord_username,
        pin: form
            .pin
            .map(|pin| auth::hash_pin(&state.pin_secret, &pin)),
        balance: form.balance,
    };

    match user::update_by_id(&state.db, id, changes).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(AppError::NotFound) => {
            warn!("User|update_by_id: user not found");
            ApiResponse::failure("User not found")
        }
        Err(AppError::Duplicate) => {
            warn!("User|update_by_id: username already exist");
            ApiResponse::failure("Username already exist")
        }
        Err(err) => server_error("User|update_by_id", &err),
    }
}

pub async fn update_by_username(
    State(state): State<AppState>,
    Path(discord_username): Path<String>,
    Form(form): Form<PatchUserForm>,
) -> ApiResponse {
    match user::get_by_username(&state.db, &discord_username).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("User|update_by_username: user does not exist");
            return ApiResponse::failure("User does not exist");
        }
        Err(err) => return server_error("User|update_by_username", &err),
    }

    let changes = UserChanges {
        discord_username: None,
        pin: form
            .pin
            .map(|pin| auth::hash_pin(&state.pin_secret, &pin)),
        balance: form.balance,
    };

    match user::update_by_username(&state.db, &discord_username, changes).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(AppError::NotFound) => {
            warn!("User|update_by_username: user not found");
            ApiResponse::failure("User not found")
        }
        Err(err) => server_error("User|update_by_username", &err),
    }
}

pub async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    match user::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("User|delete_by_id: user does not exist");
            return ApiResponse::failure("User does not exist");
        }
        Err(err) => return server_error("User|delete_by_id", &err),
    }

    match user::delete_by_id(&state.db, id).await {
        Ok(true) => ApiResponse::success("Delete action successful"),
        Ok(false) => {
            warn!("User|delete_by_id: user does not exist");
            ApiResponse::failure("User does not exist")
        }
        Err(err) => server_error("User|delete_by_id", &err),
    }
}

pub async fn delete_by_username(
    State(state): State<AppState>,
    Path(discord_username): Path<String>,
) -> ApiResponse {
    match user::get_by_username(&state.db, &discord_username).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("User|delete_by_username: user does not exist");
            return ApiResponse::failure("User does not exist");
        }
        Err(err) => return server_error("User|delete_by_username", &err),
    }

    match user::delete_by_username(&state.db, &discord_username).await {
        Ok(true) => ApiResponse::success("Delete action successful"),
        Ok(false) => {
            warn!("User|delete_by_username: user does not exist");
            ApiResponse::failure("User does not exist")
        }
        Err(err) => server_error("User|delete_by_username", &err),
    }
}
