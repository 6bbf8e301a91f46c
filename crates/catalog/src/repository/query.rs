use crate::{
    abstract_trait::ProductQueryRepositoryTrait, domain::requests::SearchProductsRequest,
    errors::RepositoryError, model::Product, repository::SharedCollection,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: SharedCollection,
}

impl ProductQueryRepository {
    pub fn new(db: SharedCollection) -> Self {
        Self { db }
    }
}

fn by_created_desc(rows: &mut [Product]) {
    rows.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then(b.product_id.cmp(&a.product_id))
    });
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching all products");

        let table = self.db.read().await;
        let mut rows = table.rows.clone();
        by_created_desc(&mut rows);

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        info!("🔍 Fetching product with ID: {id}");

        let table = self.db.read().await;

        Ok(table.rows.iter().find(|p| p.product_id == id).cloned())
    }

    async fn search(&self, req: &SearchProductsRequest) -> Result<Vec<Product>, RepositoryError> {
        info!(
            "🔍 Searching products with term: {:?}, category: {:?}",
            req.search, req.category
        );

        let needle = req.search.trim().to_lowercase();
        let table = self.db.read().await;

        let mut rows: Vec<Product> = table
            .rows
            .iter()
            .filter(|p| {
                let matches_term = needle.is_empty()
                    || contains_ci(&p.name, &needle)
                    || p.description
                        .as_deref()
                        .map(|d| contains_ci(d, &needle))
                        .unwrap_or(false)
                    || contains_ci(&p.category, &needle);

                let matches_category = req
                    .category
                    .as_deref()
                    .map(|c| p.category == c)
                    .unwrap_or(true);

                matches_term && matches_category
            })
            .cloned()
            .collect();
        by_created_desc(&mut rows);

        Ok(rows)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching products in category: {category}");

        let table = self.db.read().await;

        let mut rows: Vec<Product> = table
            .rows
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        by_created_desc(&mut rows);

        Ok(rows)
    }

    async fn categories(&self) -> Result<Vec<String>, RepositoryError> {
        info!("🔍 Projecting category column");

        let table = self.db.read().await;

        Ok(table.rows.iter().map(|p| p.category.clone()).collect())
    }
}
