use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create order_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(OrderStatus::Enum)
                    .values([
                        OrderStatus::Init,
                        OrderStatus::Completed,
                        OrderStatus::Canceled,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create orders table
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_uuid(Orders::Id))
                    .col(
                        ColumnDef::new(Orders::Status)
                            .enumeration(
                                OrderStatus::Enum,
                                [
                                    OrderStatus::Init,
                                    OrderStatus::Completed,
                                    OrderStatus::Canceled,
                                ],
                            )
                            .not_null()
                            .default("init"),
                    )
                    .col(big_integer(Orders::TotalPrice))
                    .col(timestamp_with_time_zone(Orders::RegisteredAt))
                    .to_owned(),
            )
            .await?;

        // Create order_products join table
        manager
            .create_table(
                Table::create()
                    .table(OrderProducts::Table)
                    .if_not_exists()
                    .col(pk_uuid(OrderProducts::Id))
                    .col(uuid(OrderProducts::OrderId))
                    .col(uuid(OrderProducts::ProductId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_products_order_id")
                            .from(OrderProducts::Table, OrderProducts::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_products_product_id")
                            .from(OrderProducts::Table, OrderProducts::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_products_order_id")
                    .table(OrderProducts::Table)
                    .col(OrderProducts::OrderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderProducts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(OrderStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    Status,
    TotalPrice,
    RegisteredAt,
}

#[derive(DeriveIden)]
enum OrderProducts {
    Table,
    Id,
    OrderId,
    ProductId,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum OrderStatus {
    #[sea_orm(iden = "order_status")]
    Enum,
    #[sea_orm(iden = "init")]
    Init,
    #[sea_orm(iden = "completed")]
    Completed,
    #[sea_orm(iden = "canceled")]
    Canceled,
}
