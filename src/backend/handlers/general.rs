use axum::extract::{Path, Query, State};
use chrono::{Months, NaiveTime};
use serde::Deserialize;
use tracing::warn;

use super::server_error;
use crate::backend::{ApiResponse, AppState};
use crate::database::db::queries::{category, summary, user};
use crate::database::models::MonthlySummary;

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

pub async fn monthly_summary(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<MonthQuery>,
) -> ApiResponse {
    match user::get_by_id(&state.db, user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("General|monthly_summary: user not found");
            return ApiResponse::failure("User not found");
        }
        Err(err) => return server_error("General|monthly_summary", &err),
    }

    let Some(first_day) = chrono::NaiveDate::from_ymd_opt(query.year, query.month, 1) else {
        warn!("General|monthly_summary: invalid month");
        return ApiResponse::failure("Invalid month");
    };
    let start = first_day.and_time(NaiveTime::MIN);
    let end = (first_day + Months::new(1)).and_time(NaiveTime::MIN);

    match summary::monthly_totals(&state.db, user_id, start, end).await {
        Ok((total_income, total_outcome)) => ApiResponse::success(MonthlySummary {
            user_id,
            year: query.year,
            month: query.month,
            total_income,
            total_outcome,
        }),
        Err(err) => server_error("General|monthly_summary", &err),
    }
}

pub async fn income_categories(State(state): State<AppState>) -> ApiResponse {
    match category::all_income_categories(&state.db).await {
        Ok(categories) if categories.is_empty() => {
            warn!("General|income_categories: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(categories) => ApiResponse::success(categories),
        Err(err) => server_error("General|income_categories", &err),
    }
}

pub async fn outcome_categories(State(state): State<AppState>) -> ApiResponse {
    match category::all_outcome_categories(&state.db).await {
        Ok(categories) if categories.is_empty() => {
            warn!("General|outcome_categories: data not found");
            ApiResponse::failure("Data not found")
        }
        Ok(categories) => ApiResponse::success(categories),
        Err(err) => server_error("General|outcome_categories", &err),
    }
}
