use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_order_customer")
                    .table(Order::Table)
                    .col(Order::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_order_executor")
                    .table(Order::Table)
                    .col(Order::ExecutorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_offer_customer")
                    .table(Offer::Table)
                    .col(Offer::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_offer_executor")
                    .table(Offer::Table)
                    .col(Offer::ExecutorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in ["idx_order_customer", "idx_order_executor"] {
            manager.drop_index(Index::drop().name(name).table(Order::Table).to_owned()).await?;
        }
        for name in ["idx_offer_customer", "idx_offer_executor"] {
            manager.drop_index(Index::drop().name(name).table(Offer::Table).to_owned()).await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Order { Table, CustomerId, ExecutorId }

#[derive(DeriveIden)]
enum Offer { Table, CustomerId, ExecutorId }
