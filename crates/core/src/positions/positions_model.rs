use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Holding of one symbol at the end of `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionHistory {
    pub symbol: String,
    pub quantity: f64,
    pub cost_basis: f64,
    pub date: NaiveDate,
}
