use crate::{domain::requests::SearchProductsRequest, errors::RepositoryError, model::Product};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

/// Read side of the remote product store. Every listing comes back ordered by
/// creation time descending.
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    /// Case-insensitive substring match over name, description and category
    /// (OR across the three), optionally restricted to an exact category.
    async fn search(&self, req: &SearchProductsRequest) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
    /// Projection of the category column over all rows. Duplicates are
    /// preserved; deduplication is the caller's concern.
    async fn categories(&self) -> Result<Vec<String>, RepositoryError>;
}
