use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Machine (maquina) — a piece of farm machinery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,

    /// Machinery class, e.g. "cosechadora", "tractor"
    pub kind: String,
}
