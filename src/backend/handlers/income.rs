use axum::extract::{Path, State};
use axum::Form;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use super::server_error;
use crate::backend::{ApiResponse, AppState};
use crate::database::db::queries::income::{self, NewIncome};
use crate::database::db::queries::{category, user};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct IncomeForm {
    pub user_id: i64,
    pub income_category_id: i64,
    pub description: String,
    pub amount: Decimal,
}

impl IncomeForm {
    fn into_new(self) -> NewIncome {
        NewIncome {
            income_category_id: self.income_category_id,
            user_id: self.user_id,
            description: self.description,
            amount: self.amount,
        }
    }
}

/// Checks the two foreign keys of an income form; returns the failure
/// envelope to send when one is missing.
async fn check_references(
    state: &AppState,
    identifier: &str,
    form: &IncomeForm,
) -> Option<ApiResponse> {
    match user::get_by_id(&state.db, form.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("{identifier}: user not found");
            return Some(ApiResponse::failure("User not found"));
        }
        Err(err) => return Some(server_error(identifier, &err)),
    }

    match category::income_category_by_id(&state.db, form.income_category_id).await {
        Ok(Some(_)) => None,
        Ok(None) => {
            warn!("{identifier}: income category not found");
            Some(ApiResponse::failure("Income category not found"))
        }
        Err(err) => Some(server_error(identifier, &err)),
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    match income::get_by_id(&state.db, id).await {
        Ok(Some(entry)) => ApiResponse::success(entry),
        Ok(None) => {
            warn!("Income|get_by_id: income not found");
            ApiResponse::failure("Income not found")
        }
        Err(err) => server_error("Income|get_by_id", &err),
    }
}

pub async fn get_all(State(state): State<AppState>) -> ApiResponse {
    match income::get_all(&state.db).await {
        Ok(entries) if entries.is_empty() => {
            warn!("Income|get_all: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => server_error("Income|get_all", &err),
    }
}

pub async fn get_all_by_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResponse {
    match income::get_all_by_user_id(&state.db, user_id).await {
        Ok(entries) if entries.is_empty() => {
            warn!("Income|get_all_by_user_id: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => server_error("Income|get_all_by_user_id", &err),
    }
}

pub async fn add(State(state): State<AppState>, Form(form): Form<IncomeForm>) -> ApiResponse {
    if let Some(failure) = check_references(&state, "Income|add", &form).await {
        return failure;
    }

    match income::create(&state.db, &form.into_new()).await {
        Ok(created) => ApiResponse::success(created),
        Err(err) => server_error("Income|add", &err),
    }
}

pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<IncomeForm>,
) -> ApiResponse {
    if let Some(failure) = check_references(&state, "Income|update_by_id", &form).await {
        return failure;
    }

    match income::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Income|update_by_id: income does not exist");
            return ApiResponse::failure("Income does not exist");
        }
        Err(err) => return server_error("Income|update_by_id", &err),
    }

    match income::update_by_id(&state.db, id, &form.into_new()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(AppError::NotFound) => {
            warn!("Income|update_by_id: income not found");
            ApiResponse::failure("Income not found")
        }
        Err(err) => server_error("Income|update_by_id", &err),
    }
}

pub async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    match income::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Income|delete_by_id: income does not exist");
            return ApiResponse::failure("Income does not exist");
        }
        Err(err) => return server_error("Income|delete_by_id", &err),
    }

    match income::delete_by_id(&state.db, id).await {
        Ok(true) => ApiResponse::success("Delete action successful"),
        Ok(false) => {
            warn!("Income|delete_by_id: income does not exist");
            ApiResponse::failure("Income does not exist")
        }
        Err(err) => server_error("Income|delete_by_id", &err),
    }
}
