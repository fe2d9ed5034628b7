use sqlx::{Pool, Sqlite};

use crate::database::models::Category;
use crate::error::AppError;

// Seeded once at startup; the tables stay editable afterwards.
const INCOME_CATEGORIES: &[(&str, &str)] = &[
    ("BANK BCA", "🏦"),
    ("BANK ALADIN", "🏦"),
    ("GIFT", "🎁"),
    ("CASH", "💵"),
    ("GOPAY", "📱"),
    ("OVO", "📱"),
    ("SHOPEE PAY", "🛒"),
];

const OUTCOME_CATEGORIES: &[(&str, &str)] = &[
    ("FOOD", "🍜"),
    ("TRANSPORT", "🚌"),
    ("SHOPPING", "🛍️"),
    ("BILLS", "🧾"),
    ("ENTERTAINMENT", "🎮"),
    ("HEALTH", "💊"),
    ("OTHER", "📦"),
];

pub async fn income_category_by_id(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<Option<Category>, AppError> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name, emoticon FROM income_category WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

pub async fn outcome_category_by_id(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<Option<Category>, AppError> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name, emoticon FROM outcome_category WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

pub async fn all_income_categories(pool: &Pool<Sqlite>) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, emoticon FROM income_category ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

pub async fn all_outcome_categories(pool: &Pool<Sqlite>) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, emoticon FROM outcome_category ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

/// Inserts the fixed category sets, skipping names that already exist.
pub async fn seed_default_categories(pool: &Pool<Sqlite>) -> Result<(), AppError> {
    for (name, emoticon) in INCOME_CATEGORIES {
        sqlx::query(
            r#"
            INSERT INTO income_category (name, emoticon)
            SELECT ?, ?
            WHERE NOT EXISTS (SELECT 1 FROM income_category WHERE name = ?)
            "#,
        )
        .bind(name)
        .bind(emoticon)
        .bind(name)
        .execute(pool)
        .await?;
    }

    for (name, emoticon) in OUTCOME_CATEGORIES {
        sqlx::query(
            r#"
            INSERT INTO outcome_category (name, emoticon)
            SELECT ?, ?
            WHERE NOT EXISTS (SELECT 1 FROM outcome_category WHERE name = ?)
            "#,
        )
        .bind(name)
        .bind(emoticon)
        .bind(name)
        .execute(pool)
        .await?;
    }

    Ok(())
}
