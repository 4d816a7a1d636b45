use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductSellingStatus},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();

        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(product_number = %model.product_number, "Created product");
        Ok(model.into())
    }

    async fn find_all_by_selling_status_in(
        &self,
        statuses: &[ProductSellingStatus],
    ) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(entity::Column::SellingStatus.is_in(statuses.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn find_all_by_product_number_in(
        &self,
        numbers: &[String],
    ) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(entity::Column::ProductNumber.is_in(numbers.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn find_latest_product_number(&self) -> ProductResult<Option<String>> {
        // UUIDv7 ids are time-ordered, so the highest id is the newest row
        let model = entity::Entity::find()
            .order_by_desc(entity::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.product_number))
    }
}
