use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

use crate::{
    entity,
    error::{OrderError, OrderResult},
    models::Order,
    repository::OrderRepository,
};

pub struct PgOrderRepository {
    db: DatabaseConnection,
}

impl PgOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: Order) -> OrderResult<Order> {
        // Order header and line items land together or not at all
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        entity::order::Entity::insert(entity::order::ActiveModel::from(&order))
            .exec(&txn)
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        entity::order_product::Entity::insert_many(entity::line_items(&order))
            .exec(&txn)
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(order_id = %order.id, total_price = order.total_price, "Created order");
        Ok(order)
    }
}
