use contracts::domain::Product;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a007_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub stock: f64,
    pub unit: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4()),
            company_id: Uuid::parse_str(&m.company_id).unwrap_or_else(|_| Uuid::new_v4()),
            name: m.name,
            stock: m.stock,
            unit: m.unit,
        }
    }
}

pub async fn list_by_company(
    db: &DatabaseConnection,
    company_id: Uuid,
) -> anyhow::Result<Vec<Product>> {
    let items = Entity::find()
        .filter(Column::CompanyId.eq(company_id.to_string()))
        .order_by_asc(Column::Name)
        .all(db)
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}
