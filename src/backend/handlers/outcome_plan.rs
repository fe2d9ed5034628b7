use axum::extract::{Path, State};
use axum::Form;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use super::server_error;
use crate::backend::{ApiResponse, AppState};
use crate::database::db::queries::outcome_plan::{self, NewOutcomePlan};
use crate::database::db::queries::{category, user};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct OutcomePlanForm {
    pub user_id: i64,
    pub outcome_category_id: i64,
    pub description: String,
    pub amount: Decimal,
    pub date_spend: NaiveDate,
}

impl OutcomePlanForm {
    fn into_new(self) -> NewOutcomePlan {
        NewOutcomePlan {
            outcome_category_id: self.outcome_category_id,
            user_id: self.user_id,
            description: self.description,
            amount: self.amount,
            date_spend: self.date_spend,
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
    match outcome_plan::get_by_id(&state.db, id).await {
        Ok(Some(plan)) => ApiResponse::success(plan),
        Ok(None) => {
            warn!("OutcomePlan|get_by_id: outcome plan not found");
            ApiResponse::failure("Outcome plan not found")
        }
        Err(err) => server_error("OutcomePlan|get_by_id", &err),
    }
}

pub async fn get_all(State(state): State<AppState>) -> ApiResponse {
    match outcome_plan::get_all(&state.db).await {
        Ok(plans) if plans.is_empty() => {
            warn!("OutcomePlan|get_all: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(plans) => ApiResponse::success(plans),
        Err(err) => server_error("OutcomePlan|get_all", &err),
    }
}

pub async fn get_all_by_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResponse {
    match outcome_plan::get_all_by_user_id(&state.db, user_id).await {
        Ok(plans) if plans.is_empty() => {
            warn!("OutcomePlan|get_all_by_user_id: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(plans) => ApiResponse::success(plans),
        Err(err) => server_error("OutcomePlan|get_all_by_user_id", &err),
    }
}

pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<OutcomePlanForm>,
) -> ApiResponse {
    if let Some(failure) = check_references(
        &state,
        "OutcomePlan|add",
        form.user_id,
        form.outcome_category_id,
    )
    .await
    {
        return failure;
    }

    match outcome_plan::create(&state.db, &form.into_new()).await {
        Ok(created) => ApiResponse::success(created),
        Err(err) => server_error("OutcomePlan|add", &err),
    }
}

pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<OutcomePlanForm>,
) -> ApiResponse {
    if let Some(failure) = check_references(
        &state,
        "OutcomePlan|update_by_id",
        form.user_id,
        form.outcome_category_id,
    )
    .await
    {
        return failure;
    }

    match outcome_plan::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("OutcomePlan|update_by_id: outcome plan does not exist");
            return ApiResponse::failure("Outcome plan does not exist");
        }
        Err(err) => return server_error("OutcomePlan|update_by_id", &err),
    }

    match outcome_plan::update_by_id(&state.db, id, &form.into_new()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(AppError::NotFound) => {
            warn!("OutcomePlan|update_by_id: outcome plan not found");
            ApiResponse::failure("Outcome plan not found")
        }
        Err(err) => server_error("OutcomePlan|update_by_id", &err),
    }
}

pub async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    match outcome_plan::get_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("OutcomePlan|delete_by_id: outcome plan does not exist");
            return ApiResponse::failure("Outcome plan does not exist");
        }
        Err(err) => return server_error("OutcomePlan|delete_by_id", &err),
    }

    match outcome_plan::delete_by_id(&state.db, id).await {
        Ok(true) => ApiResponse::success("Delete action successful"),
        Ok(false) => {
            warn!("OutcomePlan|delete_by_id: outcome plan does not exist");
            ApiResponse::failure("Outcome plan does not exist")
        }
        Err(err) => server_error("OutcomePlan|delete_by_id", &err),
    }
}
