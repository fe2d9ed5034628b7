use serde::Serialize;

/// Per-user income/outcome totals for one calendar month, computed by the
/// database with SUM. Totals are floats, not exact decimals.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub user_id: i64,
    pub year: i32,
    pub month: u32,
    pub total_income: f64,
    pub total_outcome: f64,
}
