pub mod budget;
pub mod general;
pub mod income;
pub mod outcome;
pub mod outcome_plan;
pub mod saving;
pub mod user;

use crate::backend::ApiResponse;
use crate::error::AppError;

/// Logs an unexpected failure under its route identifier and maps it to the
/// generic server-error envelope. Expected business outcomes never reach
/// this path.
pub(crate) fn server_error(identifier: &str, err: &AppError) -> ApiResponse {
    tracing::error!("{identifier}: {err}");
    ApiResponse::failure("Server error")
}
