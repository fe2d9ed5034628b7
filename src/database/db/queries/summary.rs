use chrono::NaiveDateTime;
use sqlx::{Pool, Row, Sqlite};

use crate::error::AppError;

/// SUM of income and outcome amounts for one user in `[start, end)`,
/// computed by the database engine. `datetime()` normalizes both bind
/// formats to the storage format before the range compare.
pub async fn monthly_totals(
    pool: &Pool<Sqlite>,
    user_id: i64,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<(f64, f64), AppError> {
    let total_income: f64 = sqlx::query(
        r#"
        SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) AS total
        FROM income
        WHERE user_id = ?
          AND date_created >= datetime(?)
          AND date_created < datetime(?)
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?
    .try_get("total")
    .map_err(AppError::from)?;

    let total_outcome: f64 = sqlx::query(
        r#"
        SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) AS total
        FROM outcome
        WHERE user_id = ?
          AND date_created >= datetime(?)
          AND date_created < datetime(?)
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?
    .try_get("total")
    .map_err(AppError::from)?;

    Ok((total_income, total_outcome))
}
