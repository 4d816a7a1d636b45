use crate::models::{Order, OrderStatus};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// SeaORM entity for the orders table
pub mod order {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "orders")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub status: OrderStatus,
        pub total_price: i64,
        pub registered_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::order_product::Entity")]
        OrderProducts,
    }

    impl Related<super::order_product::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::OrderProducts.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// SeaORM entity for the order_products join table
pub mod order_product {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "order_products")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub order_id: Uuid,
        pub product_id: Uuid,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::order::Entity",
            from = "Column::OrderId",
            to = "super::order::Column::Id"
        )]
        Order,
    }

    impl Related<super::order::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Order.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<&Order> for order::ActiveModel {
    fn from(order: &Order) -> Self {
        Self {
            id: Set(order.id),
            status: Set(order.status),
            total_price: Set(order.total_price),
            registered_at: Set(order.registered_at.into()),
        }
    }
}

/// Line item rows for an order, one per ordered product occurrence
pub fn line_items(order: &Order) -> Vec<order_product::ActiveModel> {
    order
        .products
        .iter()
        .map(|product| order_product::ActiveModel {
            id: Set(Uuid::now_v7()),
            order_id: Set(order.id),
            product_id: Set(product.id),
        })
        .collect()
}
