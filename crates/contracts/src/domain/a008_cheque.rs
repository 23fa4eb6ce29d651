use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a cheque held by the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChequeStatus {
    Pendiente,
    Cobrado,
    Rechazado,
}

impl ChequeStatus {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "pendiente" => Ok(ChequeStatus::Pendiente),
            "cobrado" => Ok(ChequeStatus::Cobrado),
            "rechazado" => Ok(ChequeStatus::Rechazado),
            _ => Err(format!("Unknown cheque status: {}", s)),
        }
    }
}

/// Cheque — a financial instrument held or issued by the company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cheque {
    pub id: Uuid,
    pub company_id: Uuid,
    pub number: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: ChequeStatus,
}
