use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductSellingStatus};

/// Repository trait for Product persistence.
///
/// Lookup misses return empty collections; absence is not an error in
/// this domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// All products whose selling status is in `statuses`, any order
    async fn find_all_by_selling_status_in(
        &self,
        statuses: &[ProductSellingStatus],
    ) -> ProductResult<Vec<Product>>;

    /// All products whose product number is in `numbers`, any order
    async fn find_all_by_product_number_in(
        &self,
        numbers: &[String],
    ) -> ProductResult<Vec<Product>>;

    /// Product number of the most recently created product, `None` when
    /// the catalog is empty
    async fn find_latest_product_number(&self) -> ProductResult<Option<String>>;
}

/// In-memory implementation of ProductRepository (for development/testing).
///
/// Keeps products in insertion order, which is what
/// `find_latest_product_number` relies on.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.push(product.clone());

        tracing::info!(product_number = %product.product_number, "Created product");
        Ok(product)
    }

    async fn find_all_by_selling_status_in(
        &self,
        statuses: &[ProductSellingStatus],
    ) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| statuses.contains(&p.selling_status))
            .cloned()
            .collect())
    }

    async fn find_all_by_product_number_in(
        &self,
        numbers: &[String],
    ) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| numbers.contains(&p.product_number))
            .cloned()
            .collect())
    }

    async fn find_latest_product_number(&self) -> ProductResult<Option<String>> {
        let products = self.products.read().await;
        Ok(products.last().map(|p| p.product_number.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateProduct, ProductType};

    fn product(number: &str, status: ProductSellingStatus, name: &str, price: i64) -> Product {
        Product::new(
            number.to_string(),
            CreateProduct {
                product_type: ProductType::Handmade,
                selling_status: status,
                name: name.to_string(),
                price,
            },
        )
    }

    #[tokio::test]
    async fn finds_products_by_selling_status_set() {
        let repo = InMemoryProductRepository::new();
        repo.create(product("001", ProductSellingStatus::Selling, "americano", 4000))
            .await
            .unwrap();
        repo.create(product("002", ProductSellingStatus::Hold, "latte", 4500))
            .await
            .unwrap();
        repo.create(product("003", ProductSellingStatus::StopSelling, "shaved ice", 7000))
            .await
            .unwrap();

        let found = repo
            .find_all_by_selling_status_in(&[
                ProductSellingStatus::Selling,
                ProductSellingStatus::Hold,
            ])
            .await
            .unwrap();

        let mut numbers: Vec<_> = found.iter().map(|p| p.product_number.as_str()).collect();
        numbers.sort();
        assert_eq!(numbers, vec!["001", "002"]);
    }

    #[tokio::test]
    async fn finds_products_by_number_set() {
        let repo = InMemoryProductRepository::new();
        repo.create(product("001", ProductSellingStatus::Selling, "americano", 4000))
            .await
            .unwrap();
        repo.create(product("002", ProductSellingStatus::Selling, "latte", 4500))
            .await
            .unwrap();

        let found = repo
            .find_all_by_product_number_in(&["002".to_string(), "999".to_string()])
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "latte");
    }

    #[tokio::test]
    async fn lookup_misses_return_empty_not_error() {
        let repo = InMemoryProductRepository::new();

        let by_status = repo
            .find_all_by_selling_status_in(&[ProductSellingStatus::Selling])
            .await
            .unwrap();
        let by_number = repo
            .find_all_by_product_number_in(&["001".to_string()])
            .await
            .unwrap();

        assert!(by_status.is_empty());
        assert!(by_number.is_empty());
    }

    #[tokio::test]
    async fn latest_product_number_follows_insertion_order() {
        let repo = InMemoryProductRepository::new();
        assert_eq!(repo.find_latest_product_number().await.unwrap(), None);

        for number in ["001", "002", "003"] {
            repo.create(product(number, ProductSellingStatus::Selling, "x", 1000))
                .await
                .unwrap();
        }

        assert_eq!(
            repo.find_latest_product_number().await.unwrap(),
            Some("003".to_string())
        );
    }
}
