use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{user, Resource};

/// A proposed customer/executor pairing, not tied to any order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "offer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
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
    pub customer_id: i32,
    pub executor_id: i32,
}

impl Resource for Entity {
    type Changes = Changes;

    const NAME: &'static str = "offer";

    fn id_of(model: &Model) -> i32 {
        model.id
    }

    fn from_changes(id: i32, c: Changes) -> Model {
        Model { id, customer_id: c.customer_id, executor_id: c.executor_id }
    }

    fn user_refs(model: &Model) -> Vec<i32> {
        vec![model.customer_id, model.executor_id]
    }
}
