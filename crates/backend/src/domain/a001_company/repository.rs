use contracts::domain::Company;
use sea_orm::entity::prelude::*;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_company")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub cuit: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Company {
    fn from(m: Model) -> Self {
        Company {
            id: Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4()),
            name: m.name,
            cuit: m.cuit,
            address: m.address,
        }
    }
}

/// The store holds a single company; take the first record like the
/// original data layer does.
pub async fn find_first(db: &DatabaseConnection) -> anyhow::Result<Option<Company>> {
    let company = Entity::find().one(db).await?;
    Ok(company.map(Into::into))
}
