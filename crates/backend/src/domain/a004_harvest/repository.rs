use chrono::NaiveDate;
use contracts::domain::Harvest;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_harvest")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub planting_id: String,
    pub date: NaiveDate,
    pub tonnes: f64,
    /// Tonnes per hectare; older records do not carry it
    pub tch: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Harvest {
    fn from(m: Model) -> Self {
        Harvest {
            id: Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4()),
            planting_id: Uuid::parse_str(&m.planting_id).unwrap_or_else(|_| Uuid::new_v4()),
            date: m.date,
            tonnes: m.tonnes,
            tch: m.tch,
        }
    }
}

pub async fn list_by_planting(
    db: &DatabaseConnection,
    planting_id: Uuid,
) -> anyhow::Result<Vec<Harvest>> {
    let items = Entity::find()
        .filter(Column::PlantingId.eq(planting_id.to_string()))
        .order_by_asc(Column::Date)
        .all(db)
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}
