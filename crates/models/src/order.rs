use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{user, Resource};

/// A job posted by a customer and taken by an executor.
///
/// Dates are kept as opaque strings.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
    Executor,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(user::Entity).from(Column::CustomerId).to(user::Column::Id).into(),
            Relation::Executor => Entity::belongs_to(user::Entity).from(Column::ExecutorId).to(user::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changes {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: i32,
}

impl Resource for Entity {
    type Changes = Changes;

    const NAME: &'static str = "order";

    fn id_of(model: &Model) -> i32 {
        model.id
    }

    fn from_changes(id: i32, c: Changes) -> Model {
        Model {
            id,
            name: c.name,
            description: c.description,
            start_date: c.start_date,
            end_date: c.end_date,
            address: c.address,
            price: c.price,
            customer_id: c.customer_id,
            executor_id: c.executor_id,
        }
    }

    fn user_refs(model: &Model) -> Vec<i32> {
        vec![model.customer_id, model.executor_id]
    }
}
