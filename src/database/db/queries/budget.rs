use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

use super::decimal_column;
use crate::database::models::Budget;
use crate::error::AppError;

/// Insert/replace payload for a budget entry.
#[derive(Debug, Clone)]
pub struct NewBudget {
    pub user_id: i64,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
}

fn budget_from_row(row: &SqliteRow) -> Result<Budget, sqlx::Error> {
    Ok(Budget {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        description: row.try_get("description")?,
        amount: decimal_column(row, "amount")?,
        due_date: row.try_get("due_date")?,
        date_created: row.try_get("date_created")?,
    })
}

pub async fn get_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Budget>, AppError> {
    let row = sqlx::query(
        r#"
        SELECT id, user_id, description, amount, due_date, date_created
        FROM budget
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(budget_from_row).transpose()?)
}

pub async fn get_all(pool: &Pool<Sqlite>) -> Result<Vec<Budget>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_id, description, amount, due_date, date_created
        FROM budget
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(budget_from_row)
        .collect::<Result<Vec<Budget>, sqlx::Error>>()?)
}

pub async fn get_all_by_user_id(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<Vec<Budget>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_id, description, amount, due_date, date_created
        FROM budget
        WHERE user_id = ?
        ORDER BY due_date ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(budget_from_row)
        .collect::<Result<Vec<Budget>, sqlx::Error>>()?)
}

pub async fn create(pool: &Pool<Sqlite>, new: &NewBudget) -> Result<Budget, AppError> {
    let row = sqlx::query(
        r#"
        INSERT INTO budget (user_id, description, amount, due_date)
        VALUES (?, ?, ?, ?)
        RETURNING id, user_id, description, amount, due_date, date_created
        "#,
    )
    .bind(new.user_id)
    .bind(&new.description)
    .bind(new.amount.to_string())
    .bind(new.due_date)
    .fetch_one(pool)
    .await
    .map_err(AppError::from_write_error)?;

    Ok(budget_from_row(&row)?)
}

pub async fn update_by_id(
    pool: &Pool<Sqlite>,
    id: i64,
    new: &NewBudget,
) -> Result<Budget, AppError> {
    let row = sqlx::query(
        r#"
        UPDATE budget
        SET user_id = ?, description = ?, amount = ?, due_date = ?
        WHERE id = ?
        RETURNING id, user_id, description, amount, due_date, date_created
        "#,
    )
    .bind(new.user_id)
    .bind(&new.description)
    .bind(new.amount.to_string())
    .bind(new.due_date)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::from_write_error)?;

    match row {
        Some(row) => Ok(budget_from_row(&row)?),
        None => Err(AppError::NotFound),
    }
}

pub async fn delete_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM budget WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
