//! Create `order` table.
//!
//! `customer_id` / `executor_id` point at `user.id` but carry no FK constraint:
//! orders may reference users that are created later.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(integer(Order::Id).primary_key())
                    .col(string_len(Order::Name, 100))
                    .col(string_len(Order::Description, 100))
                    .col(string(Order::StartDate))
                    .col(string(Order::EndDate))
                    .col(string_len(Order::Address, 200))
                    .col(integer(Order::Price))
                    .col(integer(Order::CustomerId))
                    .col(integer(Order::ExecutorId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Order::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Order { Table, Id, Name, Description, StartDate, EndDate, Address, Price, CustomerId, ExecutorId }
