use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// A planned expense: an outcome scheduled for a future spend date.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomePlan {
    pub id: i64,
    pub outcome_category_id: i64,
    pub user_id: i64,
    pub description: String,
    pub amount: Decimal,
    pub date_spend: NaiveDate,
    pub date_created: NaiveDateTime,
}
