//! The user store: lookups, uniqueness-checked creation, partial updates
//! and cascading deletes.

use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

use super::decimal_column;
use crate::database::models::User;
use crate::error::AppError;

/// Fields of a user row that may change after creation. `None` keeps the
/// stored value.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub discord_username: Option<String>,
    pub pin: Option<String>,
    pub balance: Option<Decimal>,
}

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        discord_username: row.try_get("discord_username")?,
        pin: row.try_get("pin")?,
        balance: decimal_column(row, "balance")?,
        date_created: row.try_get("date_created")?,
    })
}

pub async fn get_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<User>, AppError> {
    let row = sqlx::query(
        r#"
        SELECT id, discord_username, pin, balance, date_created
        FROM user
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(user_from_row).transpose()?)
}

pub async fn get_by_username(
    pool: &Pool<Sqlite>,
    discord_username: &str,
) -> Result<Option<User>, AppError> {
    let row = sqlx::query(
        r#"
        SELECT id, discord_username, pin, balance, date_created
        FROM user
        WHERE discord_username = ?
        "#,
    )
    .bind(discord_username)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(user_from_row).transpose()?)
}

pub async fn get_all(pool: &Pool<Sqlite>) -> Result<Vec<User>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, discord_username, pin, balance, date_created
        FROM user
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(user_from_row)
        .collect::<Result<Vec<User>, sqlx::Error>>()?)
}

/// Inserts a new user with the default balance. The UNIQUE constraint on
/// `discord_username` turns a concurrent double-insert into
/// `AppError::Duplicate`.
pub async fn create(
    pool: &Pool<Sqlite>,
    discord_username: &str,
    pin_digest: &str,
) -> Result<User, AppError> {
    let row = sqlx::query(
        r#"
        INSERT INTO user (discord_username, pin)
        VALUES (?, ?)
        RETURNING id, discord_username, pin, balance, date_created
        "#,
    )
    .bind(discord_username)
    .bind(pin_digest)
    .fetch_one(pool)
    .await
    .map_err(AppError::from_write_error)?;

    Ok(user_from_row(&row)?)
}

pub async fn update_by_id(
    pool: &Pool<Sqlite>,
    id: i64,
    changes: UserChanges,
) -> Result<User, AppError> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query(
        r#"
        SELECT id, discord_username, pin, balance, date_created
        FROM user
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let existing = match row {
        Some(row) => user_from_row(&row)?,
        None => return Err(AppError::NotFound),
    };

    let discord_username = changes
        .discord_username
        .unwrap_or(existing.discord_username);
    let pin = changes.pin.or(existing.pin);
    let balance = changes.balance.unwrap_or(existing.balance);

    sqlx::query(
        r#"
        UPDATE user
        SET discord_username = ?, pin = ?, balance = ?
        WHERE id = ?
        "#,
    )
    .bind(&discord_username)
    .bind(&pin)
    .bind(balance.to_string())
    .bind(id)
    .execute(&mut *tx)
    .await
    .map_err(AppError::from_write_error)?;

    tx.commit().await?;

    Ok(User {
        id,
        discord_username,
        pin,
        balance,
        date_created: existing.date_created,
    })
}

pub async fn update_by_username(
    pool: &Pool<Sqlite>,
    discord_username: &str,
    changes: UserChanges,
) -> Result<User, AppError> {
    let id: i64 = match sqlx::query("SELECT id FROM user WHERE discord_username = ?")
        .bind(discord_username)
        .fetch_optional(pool)
        .await?
    {
        Some(row) => row.try_get("id").map_err(AppError::from)?,
        None => return Err(AppError::NotFound),
    };

    update_by_id(pool, id, changes).await
}

/// Removes a user and every row that references it. Reports whether a user
/// row was actually removed; deleting an absent id is not an error.
pub async fn delete_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM income WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM outcome WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM outcome_plan WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM budget WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM saving WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM user WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_by_username(
    pool: &Pool<Sqlite>,
    discord_username: &str,
) -> Result<bool, AppError> {
    let id: i64 = match sqlx::query("SELECT id FROM user WHERE discord_username = ?")
        .bind(discord_username)
        .fetch_optional(pool)
        .await?
    {
        Some(row) => row.try_get("id").map_err(AppError::from)?,
        None => return Ok(false),
    };

    delete_by_id(pool, id).await
}
