use contracts::domain::Planting;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_planting")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub parcel_id: String,
    pub crop: String,
    pub season: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Planting {
    fn from(m: Model) -> Self {
        Planting {
            id: Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4()),
            parcel_id: Uuid::parse_str(&m.parcel_id).unwrap_or_else(|_| Uuid::new_v4()),
            crop: m.crop,
            season: m.season,
        }
    }
}

pub async fn list_by_parcel(
    db: &DatabaseConnection,
    parcel_id: Uuid,
) -> anyhow::Result<Vec<Planting>> {
    let items = Entity::find()
        .filter(Column::ParcelId.eq(parcel_id.to_string()))
        .all(db)
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}
