//! Per-entity CRUD queries. Each route handler validates its foreign keys
//! through these modules before writing.

pub mod budget;
pub mod category;
pub mod income;
pub mod outcome;
pub mod outcome_plan;
pub mod saving;
pub mod summary;
pub mod user;

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// Decodes a TEXT money column into an exact decimal. SQLite has no NUMERIC
/// storage class, so amounts are kept as decimal strings.
pub(crate) fn decimal_column(row: &SqliteRow, column: &str) -> Result<Decimal, sqlx::Error> {
    let text: String = row.try_get(column)?;
    Decimal::from_str(&text).map_err(|e| {
        sqlx::Error::Decode(format!("invalid decimal in column {column}: {e}").into())
    })
}
