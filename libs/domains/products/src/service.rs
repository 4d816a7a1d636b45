use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductSellingStatus};
use crate::repository::ProductRepository;

/// Width of the zero-padded product number business key
const PRODUCT_NUMBER_WIDTH: usize = 3;

/// Service layer for product catalog business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new product, assigning the next sequential product number
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let latest = self.repository.find_latest_product_number().await?;
        let product_number = next_product_number(latest.as_deref())?;

        self.repository
            .create(Product::new(product_number, input))
            .await
    }

    /// Products shown on the customer-facing menu (selling and hold)
    pub async fn get_selling_products(&self) -> ProductResult<Vec<Product>> {
        self.repository
            .find_all_by_selling_status_in(ProductSellingStatus::for_display())
            .await
    }
}

/// Derive the next sequential product number from the latest one.
///
/// Starts at "001" for an empty catalog. Numbers are zero-padded; past
/// 999 the key simply grows a digit.
fn next_product_number(latest: Option<&str>) -> ProductResult<String> {
    let Some(latest) = latest else {
        return Ok("001".to_string());
    };

    let number: u64 = latest.parse().map_err(|_| {
        ProductError::Internal(format!("Malformed product number in store: {}", latest))
    })?;

    Ok(format!("{:0width$}", number + 1, width = PRODUCT_NUMBER_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductType;
    use crate::repository::MockProductRepository;

    fn create_input(name: &str, price: i64) -> CreateProduct {
        CreateProduct {
            product_type: ProductType::Handmade,
            selling_status: ProductSellingStatus::Selling,
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn first_product_number_is_001() {
        assert_eq!(next_product_number(None).unwrap(), "001");
    }

    #[test]
    fn product_numbers_increment_with_zero_padding() {
        assert_eq!(next_product_number(Some("001")).unwrap(), "002");
        assert_eq!(next_product_number(Some("009")).unwrap(), "010");
        assert_eq!(next_product_number(Some("099")).unwrap(), "100");
    }

    #[test]
    fn product_numbers_grow_past_three_digits() {
        assert_eq!(next_product_number(Some("999")).unwrap(), "1000");
    }

    #[test]
    fn malformed_stored_number_is_an_internal_error() {
        let err = next_product_number(Some("abc")).unwrap_err();
        assert!(matches!(err, ProductError::Internal(_)));
    }

    #[tokio::test]
    async fn create_product_assigns_the_next_number() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_latest_product_number()
            .returning(|| Ok(Some("002".to_string())));
        repo.expect_create().returning(Ok);

        let service = ProductService::new(repo);
        let product = service
            .create_product(create_input("americano", 4000))
            .await
            .unwrap();

        assert_eq!(product.product_number, "003");
        assert_eq!(product.name, "americano");
    }

    #[tokio::test]
    async fn create_product_on_empty_catalog_starts_at_001() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_latest_product_number().returning(|| Ok(None));
        repo.expect_create().returning(Ok);

        let service = ProductService::new(repo);
        let product = service
            .create_product(create_input("latte", 4500))
            .await
            .unwrap();

        assert_eq!(product.product_number, "001");
    }

    #[tokio::test]
    async fn create_product_rejects_empty_name() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();

        let service = ProductService::new(repo);
        let err = service.create_product(create_input("", 4000)).await.unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn create_product_rejects_negative_price() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();

        let service = ProductService::new(repo);
        let err = service
            .create_product(create_input("americano", -1))
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn selling_products_query_uses_display_statuses() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all_by_selling_status_in()
            .withf(|statuses| statuses == ProductSellingStatus::for_display())
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(repo);
        let products = service.get_selling_products().await.unwrap();

        assert!(products.is_empty());
    }
}
