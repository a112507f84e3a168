use std::sync::Arc;

use models::{offer, order, user, Resource};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::repository::{Repositories, Repository};
use crate::ReferencePolicy;

/// CRUD contract for one resource type.
///
/// The repository is injected; the service never caches rows between calls.
/// Under [`ReferencePolicy::Strict`], creates and updates must name existing
/// users in every soft reference the record carries.
pub struct ResourceService<E: Resource> {
    repo: Arc<dyn Repository<E>>,
    users: Arc<dyn Repository<user::Entity>>,
    policy: ReferencePolicy,
}

pub type UserService = ResourceService<user::Entity>;
pub type OrderService = ResourceService<order::Entity>;
pub type OfferService = ResourceService<offer::Entity>;

impl<E: Resource> ResourceService<E> {
    pub fn new(repo: Arc<dyn Repository<E>>, users: Arc<dyn Repository<user::Entity>>, policy: ReferencePolicy) -> Self {
        Self { repo, users, policy }
    }

    pub async fn list(&self) -> Result<Vec<E::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip_all, fields(resource = E::NAME, id = E::id_of(&model)))]
    pub async fn create(&self, model: E::Model) -> Result<E::Model, ServiceError> {
        self.check_refs(&model).await?;
        let created = self.repo.insert(model).await?;
        info!("created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<E::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(E::NAME, id))
    }

    /// Full replace: every mutable column takes the value from `changes`.
    ///
    /// A missing row is reported as `NotFound` before any reference check runs.
    #[instrument(skip_all, fields(resource = E::NAME, id = id))]
    pub async fn update(&self, id: i32, changes: E::Changes) -> Result<E::Model, ServiceError> {
        if self.policy == ReferencePolicy::Strict {
            self.get(id).await?;
            self.check_refs(&E::from_changes(id, changes.clone())).await?;
        }
        let updated = self.repo.replace(id, changes).await?;
        info!("updated");
        Ok(updated)
    }

    #[instrument(skip_all, fields(resource = E::NAME, id = id))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(E::NAME, id));
        }
        info!("deleted");
        Ok(())
    }

    async fn check_refs(&self, model: &E::Model) -> Result<(), ServiceError> {
        if self.policy == ReferencePolicy::Soft {
            return Ok(());
        }
        for user_id in E::user_refs(model) {
            if self.users.get(user_id).await?.is_none() {
                return Err(ServiceError::Validation(format!("{} references unknown user {user_id}", E::NAME)));
            }
        }
        Ok(())
    }
}

/// The three controllers, wired over one set of repositories.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<UserService>,
    pub orders: Arc<OrderService>,
    pub offers: Arc<OfferService>,
}

impl Services {
    pub fn new(repos: &Repositories, policy: ReferencePolicy) -> Self {
        Self {
            users: Arc::new(ResourceService::new(repos.users.clone(), repos.users.clone(), policy)),
            orders: Arc::new(ResourceService::new(repos.orders.clone(), repos.users.clone(), policy)),
            offers: Arc::new(ResourceService::new(repos.offers.clone(), repos.users.clone(), policy)),
        }
    }
}
