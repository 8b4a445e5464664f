//! Business logic services

pub mod catalog;
pub mod lending;
pub mod stats;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub lending: lending::LendingService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the shared repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            lending: lending::LendingService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
