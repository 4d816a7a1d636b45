use chrono::{DateTime, Utc};
use domain_products::{Product, ProductRepository};
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, Order};
use crate::repository::OrderRepository;

/// Service layer for order intake
#[derive(Clone)]
pub struct OrderService<OR: OrderRepository, PR: ProductRepository> {
    orders: Arc<OR>,
    products: Arc<PR>,
}

impl<OR: OrderRepository, PR: ProductRepository> OrderService<OR, PR> {
    pub fn new(orders: OR, products: PR) -> Self {
        Self {
            orders: Arc::new(orders),
            products: Arc::new(products),
        }
    }

    /// Place an order for the requested product numbers.
    ///
    /// Every occurrence of a number becomes its own line item, so a
    /// duplicated number orders that product twice.
    pub async fn create_order(
        &self,
        input: CreateOrder,
        registered_at: DateTime<Utc>,
    ) -> OrderResult<Order> {
        input
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        let products = self.resolve_products(&input.product_numbers).await?;
        self.orders.create(Order::new(products, registered_at)).await
    }

    async fn resolve_products(&self, numbers: &[String]) -> OrderResult<Vec<Product>> {
        let found = self
            .products
            .find_all_by_product_number_in(numbers)
            .await
            .map_err(|e| OrderError::Internal(e.to_string()))?;

        let by_number: HashMap<&str, &Product> = found
            .iter()
            .map(|p| (p.product_number.as_str(), p))
            .collect();

        numbers
            .iter()
            .map(|number| {
                by_number
                    .get(number.as_str())
                    .map(|p| (*p).clone())
                    .ok_or_else(|| OrderError::UnknownProductNumber(number.clone()))
            })
            .collect()
    }
}
