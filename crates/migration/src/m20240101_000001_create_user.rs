//! Create `user` table.
//!
//! Ids are supplied by clients, so the key is a plain integer without autoincrement.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(integer(User::Id).primary_key())
                    .col(string_len(User::FirstName, 100))
                    .col(string_len(User::LastName, 100))
                    .col(integer(User::Age))
                    .col(string(User::Email))
                    .col(string(User::Role))
                    .col(string(User::Phone))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User { Table, Id, FirstName, LastName, Age, Email, Role, Phone }
