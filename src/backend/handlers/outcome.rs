use axum::extract::{Path, State};
use axum::Form;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use super::server_error;
use crate::backend::{ApiResponse, AppState};
use crate::database::db::queries::outcome::{self, NewOutcome};
use crate::database::db::queries::{category, user};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct OutcomeForm {
    pub user_id: i64,
    pub outcome_category_id: i64,
    pub description: String,
    pub amount: Decimal,
}

impl OutcomeForm {
    fn into_new(self) -> NewOutcome {
        NewOutcome {
            outcome_category_id: self.outcome_category_id,
            user_id: self.user_id,
            description: self.description,
            amount: self.amount,
        }
    }
}

async fn check_references(
    state: &AppState,
    identifier: &str,
    user_id: i64,
    outcome_category_id: i64,
) -> Option<ApiResponse> {
    match user::get_by_id(&state.db, user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("{identifier}: user not found");
            return Some(ApiResponse::failure("User not found"));
        }
        Err(err) => return Some(server_error(identifier, &err)),
    }

    match category::outcome_category_by_id(&state.db, outcome_category_id).await {
        Ok(Some(_)) => None,
        Ok(None) => {
            warn!("{identifier}: outcome category not found");
            Some(ApiResponse::failure("Outcome category not found"))
        }
        Err(err) => Some(server_error(identifier, &err)),
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    match outcome::get_by_id(&state.db, id).await {
        Ok(Some(entry)) => ApiResponse::success(entry),
        Ok(None) => {
            warn!("Outcome|get_by_id: outcome not found");
            ApiResponse::failure("Outcome not found")
        }
        Err(err) => server_error("Outcome|get_by_id", &err),
    }
}

pub async fn get_all(State(state): State<AppState>) -> ApiResponse {
    match outcome::get_all(&state.db).await {
        Ok(entries) if entries.is_empty() => {
            warn!("Outcome|get_all: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => server_error("Outcome|get_all", &err),
    }
}

pub async fn get_all_by_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResponse {
    match outcome::get_all_by_user_id(&state.db, user_id).await {
        Ok(entries) if entries.is_empty() => {
            warn!("Outcome|get_all_by_user_id: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => server_error("Outcome|get_all_by_user_id", &err),
    }
}

pub async fn add(State(state): State<AppState>, Form(form): Form<OutcomeForm>) -> ApiResponse {
    if let Some(failure) =
        check_references(&state, "Outcome|add", form.user_id, form.outcome_category_id).await
    {
        return failure;
    }

    match outcome::create(&state.db, &form.into_new()).await {
        Ok(created) => ApiResponse::success(created),
        Err(err) => server_error("Outcome|add", &err),
    }
}

pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<OutcomeForm>,
) -> ApiResponse {
    if let Some(failure) = check_references(
        &state,
        "Outcome|update_by_id",
        form.user_id,
        form.outcome_category_id,
    )
    .await
    {
        return failure;
    }

    match outcome::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Outcome|update_by_id: outcome does not exist");
            return ApiResponse::failure("Outcome does not exist");
        }
        Err(err) => return server_error("Outcome|update_by_id", &err),
    }

    match outcome::update_by_id(&state.db, id, &form.into_new()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(AppError::NotFound) => {
            warn!("Outcome|update_by_id: outcome not found");
            ApiResponse::failure("Outcome not found")
        }
        Err(err) => server_error("Outcome|update_by_id", &err),
    }
}

pub async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    match outcome::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Outcome|delete_by_id: outcome does not exist");
            return ApiResponse::failure("Outcome does not exist");
        }
        Err(err) => return server_error("Outcome|delete_by_id", &err),
    }

    match outcome::delete_by_id(&state.db, id).await {
        Ok(true) => ApiResponse::success("Delete action successful"),
        Ok(false) => {
            warn!("Outcome|delete_by_id: outcome does not exist");
            ApiResponse::failure("Outcome does not exist")
        }
        Err(err) => server_error("Outcome|delete_by_id", &err),
    }
}
