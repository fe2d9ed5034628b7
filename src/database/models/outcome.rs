use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub id: i64,
    pub outcome_category_id: i64,
    pub user_id: i64,
    pub description: String,
    pub amount: Decimal,
    pub date_created: NaiveDateTime,
}
