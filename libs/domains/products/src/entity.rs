use crate::models::{Product, ProductSellingStatus, ProductType};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub product_number: String,
    pub product_type: ProductType,
    pub selling_status: ProductSellingStatus,
    pub name: String,
    pub price: i64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            product_number: model.product_number,
            product_type: model.product_type,
            selling_status: model.selling_status,
            name: model.name,
            price: model.price,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            product_number: Set(product.product_number),
            product_type: Set(product.product_type),
            selling_status: Set(product.selling_status),
            name: Set(product.name),
            price: Set(product.price),
            created_at: Set(product.created_at.into()),
            updated_at: Set(product.updated_at.into()),
        }
    }
}
