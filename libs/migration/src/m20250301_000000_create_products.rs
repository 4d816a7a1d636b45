use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create product_type enum
        manager
            .create_type(
                Type::create()
                    .as_enum(ProductType::Enum)
                    .values([
                        ProductType::Handmade,
                        ProductType::Bottle,
                        ProductType::Bakery,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create selling_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(SellingStatus::Enum)
                    .values([
                        SellingStatus::Selling,
                        SellingStatus::Hold,
                        SellingStatus::StopSelling,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create products table
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_uuid(Products::Id))
                    .col(string(Products::ProductNumber).unique_key())
                    .col(
                        ColumnDef::new(Products::ProductType)
                            .enumeration(
                                ProductType::Enum,
                                [
                                    ProductType::Handmade,
                                    ProductType::Bottle,
                                    ProductType::Bakery,
                                ],
                            )
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Products::SellingStatus)
                            .enumeration(
                                SellingStatus::Enum,
                                [
                                    SellingStatus::Selling,
                                    SellingStatus::Hold,
                                    SellingStatus::StopSelling,
                                ],
                            )
                            .not_null()
                            .default("hold"),
                    )
                    .col(string(Products::Name))
                    .col(big_integer(Products::Price))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Products::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes for the set-membership queries
        manager
            .create_index(
                Index::create()
                    .name("idx_products_selling_status")
                    .table(Products::Table)
                    .col(Products::SellingStatus)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_product_number")
                    .table(Products::Table)
                    .col(Products::ProductNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(SellingStatus::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ProductType::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    ProductNumber,
    ProductType,
    SellingStatus,
    Name,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProductType {
    #[sea_orm(iden = "product_type")]
    Enum,
    #[sea_orm(iden = "handmade")]
    Handmade,
    #[sea_orm(iden = "bottle")]
    Bottle,
    #[sea_orm(iden = "bakery")]
    Bakery,
}

#[derive(DeriveIden)]
enum SellingStatus {
    #[sea_orm(iden = "selling_status")]
    Enum,
    #[sea_orm(iden = "selling")]
    Selling,
    #[sea_orm(iden = "hold")]
    Hold,
    #[sea_orm(iden = "stop_selling")]
    StopSelling,
}
