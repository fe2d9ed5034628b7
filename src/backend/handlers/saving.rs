use axum::extract::{Path, State};
use axum::Form;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use super::server_error;
use crate::backend::{ApiResponse, AppState};
use crate::database::db::queries::saving::{self, NewSaving};
use crate::database::db::queries::user;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SavingForm {
    pub user_id: i64,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
}

impl SavingForm {
    fn into_new(self) -> NewSaving {
        NewSaving {
            user_id: self.user_id,
            description: self.description,
            amount: self.amount,
            due_date: self.due_date,
        }
    }
}

async fn check_user(state: &AppState, identifier: &str, user_id: i64) -> Option<ApiResponse> {
    match user::get_by_id(&state.db, user_id).await {
        Ok(Some(_)) => None,
        Ok(None) => {
            warn!("{identifier}: user not found");
            Some(ApiResponse::failure("User not found"))
        }
        Err(err) => Some(server_error(identifier, &err)),
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    match saving::get_by_id(&state.db, id).await {
        Ok(Some(entry)) => ApiResponse::success(entry),
        Ok(None) => {
            warn!("Saving|get_by_id: saving not found");
            ApiResponse::failure("Saving not found")
        }
        Err(err) => server_error("Saving|get_by_id", &err),
    }
}

pub async fn get_all(State(state): State<AppState>) -> ApiResponse {
    match saving::get_all(&state.db).await {
        Ok(entries) if entries.is_empty() => {
            warn!("Saving|get_all: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => server_error("Saving|get_all", &err),
    }
}

pub async fn get_all_by_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResponse {
    match saving::get_all_by_user_id(&state.db, user_id).await {
        Ok(entries) if entries.is_empty() => {
            warn!("Saving|get_all_by_user_id: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => server_error("Saving|get_all_by_user_id", &err),
    }
}

pub async fn add(State(state): State<AppState>, Form(form): Form<SavingForm>) -> ApiResponse {
    if let Some(failure) = check_user(&state, "Saving|add", form.user_id).await {
        return failure;
    }

    match saving::create(&state.db, &form.into_new()).await {
        Ok(created) => ApiResponse::success(created),
        Err(err) => server_error("Saving|add", &err),
    }
}

pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<SavingForm>,
) -> ApiResponse {
    if let Some(failure) = check_user(&state, "Saving|update_by_id", form.user_id).await {
        return failure;
    }

    match saving::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Saving|update_by_id: saving does not exist");
            return ApiResponse::failure("Saving does not exist");
        }
        Err(err) => return server_error("Saving|update_by_id", &err),
    }

    match saving::update_by_id(&state.db, id, &form.into_new()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(AppError::NotFound) => {
            warn!("Saving|update_by_id: saving not found");
            ApiResponse::failure("Saving not found")
        }
        Err(err) => server_error("Saving|update_by_id", &err),
    }
}

pub async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    match saving::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Saving|delete_by_id: saving does not exist");
            return ApiResponse::failure("Saving does not exist");
        }
        Err(err) => return server_error("Saving|delete_by_id", &err),
    }

    match saving::delete_by_id(&state.db, id).await {
        Ok(true) => ApiResponse::success("Delete action successful"),
        Ok(false) => {
            warn!("Saving|delete_by_id: saving does not exist");
            ApiResponse::failure("Saving does not exist")
        }
        Err(err) => server_error("Saving|delete_by_id", &err),
    }
}
