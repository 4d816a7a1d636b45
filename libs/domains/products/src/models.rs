use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// How a product is produced.
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
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "product_type")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductType {
    /// Prepared to order by a barista
    #[sea_orm(string_value = "handmade")]
    Handmade,
    /// Pre-packaged bottled goods
    #[sea_orm(string_value = "bottle")]
    Bottle,
    /// Baked goods
    #[sea_orm(string_value = "bakery")]
    Bakery,
}

/// Lifecycle flag controlling catalog visibility.
///
/// Transitions are unconstrained; an administrator may move a product
/// between any two statuses.
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "selling_status")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductSellingStatus {
    /// On sale
    #[sea_orm(string_value = "selling")]
    Selling,
    /// Temporarily withheld but still shown
    #[default]
    #[sea_orm(string_value = "hold")]
    Hold,
    /// Withdrawn from sale
    #[sea_orm(string_value = "stop_selling")]
    StopSelling,
}

impl ProductSellingStatus {
    /// Statuses shown on the customer-facing menu.
    pub fn for_display() -> &'static [ProductSellingStatus] {
        &[ProductSellingStatus::Selling, ProductSellingStatus::Hold]
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Sequential business key ("001", "002", ...), unique per product
    pub product_number: String,
    pub product_type: ProductType,
    pub selling_status: ProductSellingStatus,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a new product with a service-assigned product number.
    pub fn new(product_number: String, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            product_number,
            product_type: input.product_type,
            selling_status: input.selling_status,
            name: input.name,
            price: input.price,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    pub product_type: ProductType,
    #[serde(default)]
    pub selling_status: ProductSellingStatus,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price: i64,
}

/// Catalog entry as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub product_number: String,
    pub product_type: ProductType,
    pub selling_status: ProductSellingStatus,
    pub name: String,
    pub price: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_number: product.product_number,
            product_type: product.product_type,
            selling_status: product.selling_status,
            name: product.name,
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_statuses_exclude_stop_selling() {
        let display = ProductSellingStatus::for_display();
        assert!(display.contains(&ProductSellingStatus::Selling));
        assert!(display.contains(&ProductSellingStatus::Hold));
        assert!(!display.contains(&ProductSellingStatus::StopSelling));
    }

    #[test]
    fn selling_status_round_trips_through_strings() {
        assert_eq!(ProductSellingStatus::StopSelling.to_string(), "stop_selling");
        assert_eq!(
            "stop_selling".parse::<ProductSellingStatus>().unwrap(),
            ProductSellingStatus::StopSelling
        );
    }

    #[test]
    fn new_product_carries_the_assigned_number() {
        let input = CreateProduct {
            product_type: ProductType::Handmade,
            selling_status: ProductSellingStatus::Selling,
            name: "americano".to_string(),
            price: 4000,
        };

        let product = Product::new("001".to_string(), input);

        assert_eq!(product.product_number, "001");
        assert_eq!(product.name, "americano");
        assert_eq!(product.price, 4000);
    }
}
