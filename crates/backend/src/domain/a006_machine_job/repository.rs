use chrono::NaiveDate;
use contracts::domain::MachineJob;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a006_machine_job")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub machine_id: String,
    pub description: String,
    pub hectares: f64,
    pub date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MachineJob {
    fn from(m: Model) -> Self {
        MachineJob {
            id: Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4()),
            machine_id: Uuid::parse_str(&m.machine_id).unwrap_or_else(|_| Uuid::new_v4()),
            description: m.description,
            hectares: m.hectares,
            date: m.date,
        }
    }
}

pub async fn list_by_machine(
    db: &DatabaseConnection,
    machine_id: Uuid,
) -> anyhow::Result<Vec<MachineJob>> {
    let items = Entity::find()
        .filter(Column::MachineId.eq(machine_id.to_string()))
        .order_by_asc(Column::Date)
        .all(db)
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}
