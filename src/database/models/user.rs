use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// A user account. `pin` holds the credential digest, never the plaintext,
/// and is excluded from every serialized payload.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub discord_username: String,
    #[serde(skip_serializing)]
    pub pin: Option<String>,
    pub balance: Decimal,
    pub date_created: NaiveDateTime,
}
