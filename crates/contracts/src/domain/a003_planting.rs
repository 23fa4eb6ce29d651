use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Planting (cultivo) — a crop instance grown on a parcel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planting {
    pub id: Uuid,
    pub parcel_id: Uuid,

    /// Crop name, e.g. "Caña de azúcar"
    pub crop: String,

    /// Campaign label, e.g. "2024/2025"
    pub season: String,
}
