use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::OrderResult;
use crate::models::Order;

/// Repository trait for Order persistence
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order together with its line items
    async fn create(&self, order: Order) -> OrderResult<Order>;
}

/// In-memory implementation of OrderRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored orders, in insertion order
    pub async fn all(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: Order) -> OrderResult<Order> {
        let mut orders = self.orders.write().await;
        orders.push(order.clone());

        tracing::info!(order_id = %order.id, total_price = order.total_price, "Created order");
        Ok(order)
    }
}
