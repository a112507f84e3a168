use sea_orm::EntityTrait;
use serde::de::DeserializeOwned;

/// An entity that is exposed as a CRUD resource.
///
/// Primary keys are caller-supplied `i32` ids.
pub trait Resource: EntityTrait {
    /// Every mutable column; an update overwrites all of them.
    type Changes: DeserializeOwned + Clone + Send + Sync + 'static;

    /// Singular name used in error messages, logs and metrics.
    const NAME: &'static str;

    fn id_of(model: &Self::Model) -> i32;

    /// Build the full row that replaces record `id`.
    fn from_changes(id: i32, changes: Self::Changes) -> Self::Model;

    /// User ids this record points at (soft references, not enforced by the schema).
    fn user_refs(_model: &Self::Model) -> Vec<i32> {
        Vec::new()
    }
}
