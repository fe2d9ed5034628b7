use serde::Serialize;
use sqlx::FromRow;

/// Income and outcome categories share the same shape; the tables differ.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub emoticon: Option<String>,
}
