use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Parcel (lote) — a unit of cultivated land belonging to a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parcel {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub hectares: f64,
}
