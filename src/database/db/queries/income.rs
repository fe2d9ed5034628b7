use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

use super::decimal_column;
use crate::database::models::Income;
use crate::error::AppError;

/// Insert/replace payload for an income entry.
#[derive(Debug, Clone)]
pub struct NewIncome {
    pub income_category_id: i64,
    pub user_id: i64,
    pub description: String,
    pub amount: Decimal,
}

fn income_from_row(row: &SqliteRow) -> Result<Income, sqlx::Error> {
    Ok(Income {
        id: row.try_get("id")?,
        income_category_id: row.try_get("income_category_id")?,
        user_id: row.try_get("user_id")?,
        description: row.try_get("description")?,
        amount: decimal_column(row, "amount")?,
        date_created: row.try_get("date_created")?,
    })
}

pub async fn get_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Income>, AppError> {
    let row = sqlx::query(
        r#"
        SELECT id, income_category_id, user_id, description, amount, date_created
        FROM income
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(income_from_row).transpose()?)
}

pub async fn get_all(pool: &Pool<Sqlite>) -> Result<Vec<Income>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, income_category_id, user_id, description, amount, date_created
        FROM income
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(income_from_row)
        .collect::<Result<Vec<Income>, sqlx::Error>>()?)
}

pub async fn get_all_by_user_id(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<Vec<Income>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, income_category_id, user_id, description, amount, date_created
        FROM income
        WHERE user_id = ?
        ORDER BY date_created DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(income_from_row)
        .collect::<Result<Vec<Income>, sqlx::Error>>()?)
}

pub async fn create(pool: &Pool<Sqlite>, new: &NewIncome) -> Result<Income, AppError> {
    let row = sqlx::query(
        r#"
        INSERT INTO income (income_category_id, user_id, description, amount)
        VALUES (?, ?, ?, ?)
        RETURNING id, income_category_id, user_id, description, amount, date_created
        "#,
    )
    .bind(new.income_category_id)
    .bind(new.user_id)
    .bind(&new.description)
    .bind(new.amount.to_string())
    .fetch_one(pool)
    .await
    .map_err(AppError::from_write_error)?;

    Ok(income_from_row(&row)?)
}

pub async fn update_by_id(
    pool: &Pool<Sqlite>,
    id: i64,
    new: &NewIncome,
) -> Result<Income, AppError> {
    let row = sqlx::query(
        r#"
        UPDATE income
        SET income_category_id = ?, user_id = ?, description = ?, amount = ?
        WHERE id = ?
        RETURNING id, income_category_id, user_id, description, amount, date_created
        "#,
    )
    .bind(new.income_category_id)
    .bind(new.user_id)
    .bind(&new.description)
    .bind(new.amount.to_string())
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::from_write_error)?;

    match row {
        Some(row) => Ok(income_from_row(&row)?),
        None => Err(AppError::NotFound),
    }
}

pub async fn delete_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM income WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
