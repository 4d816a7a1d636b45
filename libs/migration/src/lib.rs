pub use sea_orm_migration::prelude::*;

mod m20250301_000000_create_products;
mod m20250301_000001_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000000_create_products::Migration),
            Box::new(m20250301_000001_create_orders::Migration),
        ]
    }
}
