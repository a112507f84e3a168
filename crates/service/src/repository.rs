use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use models::{offer, order, user, Resource};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait, SqlErr,
};
use tracing::debug;

use crate::errors::ServiceError;

/// Single-table storage operations for one resource.
///
/// Every call commits on its own; nothing spans more than one statement
/// except the existence check in front of `insert` / `replace`, which the
/// primary-key constraint backs up.
#[async_trait]
pub trait Repository<E: Resource>: Send + Sync {
    /// Full-table scan, no ordering guarantee.
    async fn list(&self) -> Result<Vec<E::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<E::Model>, ServiceError>;
    /// Fails with `Conflict` when the id is taken.
    async fn insert(&self, model: E::Model) -> Result<E::Model, ServiceError>;
    /// Overwrites every mutable column; `NotFound` when the row is absent.
    async fn replace(&self, id: i32, changes: E::Changes) -> Result<E::Model, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    /// Removes every row, returning how many went.
    async fn clear(&self) -> Result<u64, ServiceError>;
    async fn bulk_insert(&self, models: Vec<E::Model>) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

/// Map driver errors onto the service taxonomy for row `id` of `entity`.
fn classify(err: DbErr, entity: &str, id: i32) -> ServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return ServiceError::conflict(entity, id);
    }
    match err {
        DbErr::RecordNotUpdated => ServiceError::not_found(entity, id),
        other => ServiceError::Db(other.to_string()),
    }
}

#[async_trait]
impl<E> Repository<E> for SeaOrmRepository<E>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    async fn list(&self) -> Result<Vec<E::Model>, ServiceError> {
        Ok(E::find().all(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<E::Model>, ServiceError> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, model: E::Model) -> Result<E::Model, ServiceError> {
        let id = E::id_of(&model);
        if self.get(id).await?.is_some() {
            return Err(ServiceError::conflict(E::NAME, id));
        }
        let am: E::ActiveModel = model.into_active_model();
        am.reset_all().insert(&self.db).await.map_err(|e| classify(e, E::NAME, id))
    }

    async fn replace(&self, id: i32, changes: E::Changes) -> Result<E::Model, ServiceError> {
        if self.get(id).await?.is_none() {
            return Err(ServiceError::not_found(E::NAME, id));
        }
        let am: E::ActiveModel = E::from_changes(id, changes).into_active_model();
        am.reset_all().update(&self.db).await.map_err(|e| classify(e, E::NAME, id))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = E::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn clear(&self) -> Result<u64, ServiceError> {
        let res = E::delete_many().exec(&self.db).await?;
        debug!(resource = E::NAME, removed = res.rows_affected, "table cleared");
        Ok(res.rows_affected)
    }

    async fn bulk_insert(&self, models: Vec<E::Model>) -> Result<u64, ServiceError> {
        let Some(first_id) = models.first().map(E::id_of) else { return Ok(0) };
        let rows = models.into_iter().map(|m| {
            let am: E::ActiveModel = m.into_active_model();
            am.reset_all()
        });
        E::insert_many(rows)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| match classify(e, E::NAME, first_id) {
                ServiceError::Conflict(_) => {
                    ServiceError::Conflict(format!("duplicate {} id in batch starting at {first_id}", E::NAME))
                }
                other => other,
            })
    }
}

/// One repository per table, sharing a connection pool.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn Repository<user::Entity>>,
    pub orders: Arc<dyn Repository<order::Entity>>,
    pub offers: Arc<dyn Repository<offer::Entity>>,
}

impl Repositories {
    pub fn sea_orm(db: &DatabaseConnection) -> Self {
        Self {
            users: Arc::new(SeaOrmRepository::<user::Entity>::new(db.clone())),
            orders: Arc::new(SeaOrmRepository::<order::Entity>::new(db.clone())),
            offers: Arc::new(SeaOrmRepository::<offer::Entity>::new(db.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn offer(id: i32, customer_id: i32, executor_id: i32) -> offer::Model {
        offer::Model { id, customer_id, executor_id }
    }

    #[tokio::test]
    async fn insert_get_list_delete() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmRepository::<offer::Entity>::new(db);

        assert!(repo.list().await?.is_empty());
        assert_eq!(repo.insert(offer(1, 10, 20)).await?, offer(1, 10, 20));
        assert_eq!(repo.get(1).await?, Some(offer(1, 10, 20)));
        assert_eq!(repo.get(2).await?, None);
        assert_eq!(repo.list().await?.len(), 1);

        assert!(repo.delete(1).await?);
        assert!(!repo.delete(1).await?);
        assert_eq!(repo.get(1).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_insert_is_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmRepository::<offer::Entity>::new(db);
        repo.insert(offer(1, 10, 20)).await?;

        let err = repo.insert(offer(1, 30, 40)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        assert_eq!(repo.get(1).await?, Some(offer(1, 10, 20)));
        Ok(())
    }

    #[tokio::test]
    async fn replace_overwrites_all_columns() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmRepository::<offer::Entity>::new(db);
        repo.insert(offer(3, 10, 20)).await?;

        let updated = repo.replace(3, offer::Changes { customer_id: 11, executor_id: 21 }).await?;
        assert_eq!(updated, offer(3, 11, 21));
        assert_eq!(repo.get(3).await?, Some(offer(3, 11, 21)));

        let err = repo.replace(4, offer::Changes { customer_id: 1, executor_id: 1 }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(repo.get(4).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn clear_and_bulk_insert() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmRepository::<offer::Entity>::new(db);

        assert_eq!(repo.bulk_insert(Vec::new()).await?, 0);
        assert_eq!(repo.bulk_insert(vec![offer(1, 1, 2), offer(2, 2, 3), offer(3, 3, 4)]).await?, 3);
        assert_eq!(repo.list().await?.len(), 3);

        assert_eq!(repo.clear().await?, 3);
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn bulk_insert_with_taken_id_is_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmRepository::<offer::Entity>::new(db);
        repo.insert(offer(2, 1, 1)).await?;

        let err = repo.bulk_insert(vec![offer(1, 1, 2), offer(2, 2, 3)]).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        Ok(())
    }
}
