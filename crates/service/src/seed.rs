//! Start-up reset of the store from a static dataset.
//!
//! Rows are deserialized straight into the entity models, so every column is
//! filled from the field of the same name.

use std::path::Path;

use models::{offer, order, user};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::repository::Repositories;

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<user::Model>,
    #[serde(default)]
    pub orders: Vec<order::Model>,
    #[serde(default)]
    pub offers: Vec<offer::Model>,
}

impl SeedData {
    /// The dataset compiled into the binary.
    pub fn builtin() -> Result<Self, ServiceError> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(json).map_err(|e| ServiceError::Seed(e.to_string()))
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Seed(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }
}

/// Rows written per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub orders: u64,
    pub offers: u64,
}

/// Wipe all three tables and load `data`, users first.
///
/// Not meant to run while requests are being served.
#[instrument(skip_all)]
pub async fn seed(repos: &Repositories, data: &SeedData) -> Result<SeedReport, ServiceError> {
    let removed_offers = repos.offers.clear().await?;
    let removed_orders = repos.orders.clear().await?;
    let removed_users = repos.users.clear().await?;
    info!(removed_users, removed_orders, removed_offers, "store cleared");

    let report = SeedReport {
        users: repos.users.bulk_insert(data.users.clone()).await?,
        orders: repos.orders.bulk_insert(data.orders.clone()).await?,
        offers: repos.offers.bulk_insert(data.offers.clone()).await?,
    };
    info!(users = report.users, orders = report.orders, offers = report.offers, "store seeded");
    Ok(report)
}
