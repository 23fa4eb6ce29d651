use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product (producto) — an input or output held in stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub stock: f64,

    /// Stock unit, e.g. "kg", "lt", "bolsas"
    pub unit: String,
}
