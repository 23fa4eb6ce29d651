use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job (trabajo) — a unit of field work performed by a machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineJob {
    pub id: Uuid,
    pub machine_id: Uuid,
    pub description: String,
    pub hectares: f64,
    pub date: NaiveDate,
}
