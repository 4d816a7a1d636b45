use chrono::{DateTime, Utc};
use domain_products::{Product, ProductResponse};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Fulfilment state of an order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "order_status")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    /// Accepted, not yet fulfilled
    #[default]
    #[sea_orm(string_value = "init")]
    Init,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "canceled")]
    Canceled,
}

/// An accepted order with its priced line items.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub status: OrderStatus,
    /// Sum of line item prices, in the smallest currency unit
    pub total_price: i64,
    pub registered_at: DateTime<Utc>,
    pub products: Vec<Product>,
}

impl Order {
    /// Build a new order over resolved products, priced at registration time.
    pub fn new(products: Vec<Product>, registered_at: DateTime<Utc>) -> Self {
        let total_price = products.iter().map(|p| p.price).sum();
        Self {
            id: Uuid::now_v7(),
            status: OrderStatus::Init,
            total_price,
            registered_at,
            products,
        }
    }
}

/// DTO for placing a new order
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrder {
    /// Product numbers to order; duplicates order the same product twice
    #[validate(length(min = 1))]
    pub product_numbers: Vec<String>,
}

/// Order as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub status: OrderStatus,
    pub total_price: i64,
    pub registered_at: DateTime<Utc>,
    pub products: Vec<ProductResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            status: order.status,
            total_price: order.total_price,
            registered_at: order.registered_at,
            products: order.products.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_products::{CreateProduct, ProductSellingStatus, ProductType};

    fn product(number: &str, name: &str, price: i64) -> Product {
        Product::new(
            number.to_string(),
            CreateProduct {
                product_type: ProductType::Handmade,
                selling_status: ProductSellingStatus::Selling,
                name: name.to_string(),
                price,
            },
        )
    }

    #[test]
    fn new_order_totals_line_item_prices() {
        let order = Order::new(
            vec![product("001", "americano", 4000), product("002", "latte", 4500)],
            Utc::now(),
        );

        assert_eq!(order.total_price, 8500);
        assert_eq!(order.status, OrderStatus::Init);
        assert_eq!(order.products.len(), 2);
    }

    #[test]
    fn duplicate_products_count_twice_toward_the_total() {
        let order = Order::new(
            vec![product("001", "americano", 4000), product("001", "americano", 4000)],
            Utc::now(),
        );

        assert_eq!(order.total_price, 8000);
    }
}
