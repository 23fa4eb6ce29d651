use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Company (empresa) — the agricultural company the assistant answers about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,

    /// Trade name
    pub name: String,

    /// Argentine tax id (CUIT)
    pub cuit: String,

    /// Street address / location
    pub address: String,
}
