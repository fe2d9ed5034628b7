use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

use super::decimal_column;
use crate::database::models::OutcomePlan;
use crate::error::AppError;

/// Insert/replace payload for a planned expense.
#[derive(Debug, Clone)]
pub struct NewOutcomePlan {
    pub outcome_category_id: i64,
    pub user_id: i64,
    pub description: String,
    pub amount: Decimal,
    pub date_spend: NaiveDate,
}

fn plan_from_row(row: &SqliteRow) -> Result<OutcomePlan, sqlx::Error> {
    Ok(OutcomePlan {
        id: row.try_get("id")?,
        outcome_category_id: row.try_get("outcome_category_id")?,
        user_id: row.try_get("user_id")?,
        description: row.try_get("description")?,
        amount: decimal_column(row, "amount")?,
        date_spend: row.try_get("date_spend")?,
        date_created: row.try_get("date_created")?,
    })
}

pub async fn get_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<OutcomePlan>, AppError> {
    let row = sqlx::query(
        r#"
        SELECT id, outcome_category_id, user_id, description, amount, date_spend, date_created
        FROM outcome_plan
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(plan_from_row).transpose()?)
}

pub async fn get_all(pool: &Pool<Sqlite>) -> Result<Vec<OutcomePlan>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, outcome_category_id, user_id, description, amount, date_spend, date_created
        FROM outcome_plan
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(plan_from_row)
        .collect::<Result<Vec<OutcomePlan>, sqlx::Error>>()?)
}

pub async fn get_all_by_user_id(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<Vec<OutcomePlan>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, outcome_category_id, user_id, description, amount, date_spend, date_created
        FROM outcome_plan
        WHERE user_id = ?
        ORDER BY date_spend ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(plan_from_row)
        .collect::<Result<Vec<OutcomePlan>, sqlx::Error>>()?)
}

pub async fn create(pool: &Pool<Sqlite>, new: &NewOutcomePlan) -> Result<OutcomePlan, AppError> {
    let row = sqlx::query(
        r#"
        INSERT INTO outcome_plan (outcome_category_id, user_id, description, amount, date_spend)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, outcome_category_id, user_id, description, amount, date_spend, date_created
        "#,
    )
    .bind(new.outcome_category_id)
    .bind(new.user_id)
    .bind(&new.description)
    .bind(new.amount.to_string())
    .bind(new.date_spend)
    .fetch_one(pool)
    .await
    .map_err(AppError::from_write_error)?;

    Ok(plan_from_row(&row)?)
}

pub async fn update_by_id(
    pool: &Pool<Sqlite>,
    id: i64,
    new: &NewOutcomePlan,
) -> Result<OutcomePlan, AppError> {
    let row = sqlx::query(
        r#"
        UPDATE outcome_plan
        SET outcome_category_id = ?, user_id = ?, description = ?, amount = ?, date_spend = ?
        WHERE id = ?
        RETURNING id, outcome_category_id, user_id, description, amount, date_spend, date_created
        "#,
    )
    .bind(new.outcome_category_id)
    .bind(new.user_id)
    .bind(&new.description)
    .bind(new.amount.to_string())
    .bind(new.date_spend)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::from_write_error)?;

    match row {
        Some(row) => Ok(plan_from_row(&row)?),
        None => Err(AppError::NotFound),
    }
}

pub async fn delete_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM outcome_plan WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
