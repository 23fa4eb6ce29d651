use contracts::domain::Parcel;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_parcel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub hectares: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Parcel {
    fn from(m: Model) -> Self {
        Parcel {
            id: Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4()),
            company_id: Uuid::parse_str(&m.company_id).unwrap_or_else(|_| Uuid::new_v4()),
            name: m.name,
            hectares: m.hectares,
        }
    }
}

pub async fn list_by_company(
    db: &DatabaseConnection,
    company_id: Uuid,
) -> anyhow::Result<Vec<Parcel>> {
    let items = Entity::find()
        .filter(Column::CompanyId.eq(company_id.to_string()))
        .order_by_asc(Column::Name)
        .all(db)
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}

/// Table-wide parcel count, the one query that does not go through the
/// loaded graph.
pub async fn count_all(db: &DatabaseConnection) -> anyhow::Result<u64> {
    let total = Entity::find().count(db).await?;
    Ok(total)
}
