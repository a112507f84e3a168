//! Entity definitions for the marketplace tables plus the database handle.
//!
//! Each entity module exposes the SeaORM `Model`/`Entity` pair and a `Changes`
//! struct carrying every mutable column, which is what a full replace writes.

pub mod db;
pub mod resource;
pub mod user;
pub mod order;
pub mod offer;

pub use resource::Resource;

#[cfg(test)]
mod tests;
