use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Resource;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changes {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl Resource for Entity {
    type Changes = Changes;

    const NAME: &'static str = "user";

    fn id_of(model: &Model) -> i32 {
        model.id
    }

    fn from_changes(id: i32, c: Changes) -> Model {
        Model {
            id,
            first_name: c.first_name,
            last_name: c.last_name,
            age: c.age,
            email: c.email,
            role: c.role,
            phone: c.phone,
        }
    }
}
