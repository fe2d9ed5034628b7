use axum::extract::{Path, State};
use axum::Form;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use super::server_error;
use crate::backend::{ApiResponse, AppState};
use crate::database::db::queries::budget::{self, NewBudget};
use crate::database::db::queries::user;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct BudgetForm {
    pub user_id: i64,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
}

impl BudgetForm {
    fn into_new(self) -> NewBudget {
        NewBudget {
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
    match budget::get_by_id(&state.db, id).await {
        Ok(Some(entry)) => ApiResponse::success(entry),
        Ok(None) => {
            warn!("Budget|get_by_id: budget not found");
            ApiResponse::failure("Budget not found")
        }
        Err(err) => server_error("Budget|get_by_id", &err),
    }
}

pub async fn get_all(State(state): State<AppState>) -> ApiResponse {
    match budget::get_all(&state.db).await {
        Ok(entries) if entries.is_empty() => {
            warn!("Budget|get_all: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => server_error("Budget|get_all", &err),
    }
}

pub async fn get_all_by_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResponse {
    match budget::get_all_by_user_id(&state.db, user_id).await {
        Ok(entries) if entries.is_empty() => {
            warn!("Budget|get_all_by_user_id: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => server_error("Budget|get_all_by_user_id", &err),
    }
}

pub async fn add(State(state): State<AppState>, Form(form): Form<BudgetForm>) -> ApiResponse {
    if let Some(failure) = check_user(&state, "Budget|add", form.user_id).await {
        return failure;
    }

    match budget::create(&state.db, &form.into_new()).await {
        Ok(created) => ApiResponse::success(created),
        Err(err) => server_error("Budget|add", &err),
    }
}

pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<BudgetForm>,
) -> ApiResponse {
    if let Some(failure) = check_user(&state, "Budget|update_by_id", form.user_id).await {
        return failure;
    }

    match budget::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Budget|update_by_id: budget does not exist");
            return ApiResponse::failure("Budget does not exist");
        }
        Err(err) => return server_error("Budget|update_by_id", &err),
    }

    match budget::update_by_id(&state.db, id, &form.into_new()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(AppError::NotFound) => {
            warn!("Budget|update_by_id: budget not found");
            ApiResponse::failure("Budget not found")
        }
        Err(err) => server_error("Budget|update_by_id", &err),
    }
}

pub async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    match budget::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Budget|delete_by_id: budget does not exist");
            return ApiResponse::failure("Budget does not exist");
        }
        Err(err) => return server_error("Budget|delete_by_id", &err),
    }

    match budget::delete_by_id(&state.db, id).await {
        Ok(true) => ApiResponse::success("Delete action successful"),
        Ok(false) => {
            warn!("Budget|delete_by_id: budget does not exist");
            ApiResponse::failure("Budget does not exist")
        }
        Err(err) => server_error("Budget|delete_by_id", &err),
    }
}
