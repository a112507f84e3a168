//! Service layer providing the CRUD contract for users, orders and offers.
//! - `repository`: storage adapter over SeaORM, one generic implementation per entity.
//! - `resource_service`: per-resource controller, reference policy enforcement.
//! - `seed`: start-up reset of all tables from a static dataset.

pub mod errors;
pub mod repository;
pub mod resource_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;

pub use configs::ReferencePolicy;
