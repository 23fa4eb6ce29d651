use chrono::NaiveDate;
use contracts::domain::a008_cheque::{Cheque, ChequeStatus};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a008_cheque")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub company_id: String,
    pub number: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Cheque {
    fn from(m: Model) -> Self {
        Cheque {
            id: Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4()),
            company_id: Uuid::parse_str(&m.company_id).unwrap_or_else(|_| Uuid::new_v4()),
            number: m.number,
            amount: m.amount,
            due_date: m.due_date,
            status: ChequeStatus::from_str(&m.status).unwrap_or(ChequeStatus::Pendiente),
        }
    }
}

pub async fn list_by_company(
    db: &DatabaseConnection,
    company_id: Uuid,
) -> anyhow::Result<Vec<Cheque>> {
    let items = Entity::find()
        .filter(Column::CompanyId.eq(company_id.to_string()))
        .order_by_asc(Column::DueDate)
        .all(db)
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}
