use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Harvest (cosecha) — a yield record tied to a planting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Harvest {
    pub id: Uuid,
    pub planting_id: Uuid,
    pub date: NaiveDate,

    /// Harvested weight in tonnes
    pub tonnes: f64,

    /// Tonnes per hectare (TCH); not every record carries it
    pub tch: Option<f64>,
}
