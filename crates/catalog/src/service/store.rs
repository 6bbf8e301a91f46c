use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository},
    domain::{
        requests::{CreateProductRequest, SearchProductsRequest, UpdateProductRequest},
        responses::ProductResponse,
    },
    model::Product,
};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{error, info};
use validator::Validate;

/// Client-side product record store: an ordered in-memory mirror of the
/// remote collection plus the mutation operations that keep the two in sync.
///
/// The remote store is authoritative. The cache is only ever touched after a
/// remote call confirms, so a failed call never leaves it half-mutated. No
/// operation here returns an error to the caller; failures record a message
/// in the error slot and degrade to `None` / `false` / an empty listing, so
/// batch callers can keep going past individual failures.
pub struct ProductStoreService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    cache: RwLock<Vec<Product>>,
    loading: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl ProductStoreService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self {
            query,
            command,
            cache: RwLock::new(Vec::new()),
            loading: AtomicBool::new(true),
            last_error: RwLock::new(None),
        }
    }

    /// Replaces the whole cache with the remote listing, most recently
    /// created first. On failure the previous cache stays intact and the
    /// error slot carries the message.
    pub async fn load(&self) {
        info!("🔄 Loading products from remote store");
        self.loading.store(true, Ordering::SeqCst);
        *self.last_error.write().await = None;

        match self.query.find_all().await {
            Ok(products) => {
                info!("✅ Loaded {} products", products.len());
                *self.cache.write().await = products;
            }
            Err(err) => {
                self.record_error(format!("An error occurred: {err}")).await;
            }
        }

        self.loading.store(false, Ordering::SeqCst);
    }

    /// Sends the draft with optional fields defaulted; on success the stored
    /// record is prepended to the cache and returned. Never raises: a failed
    /// create yields `None` with the error recorded.
    pub async fn create(&self, req: CreateProductRequest) -> Option<ProductResponse> {
        let draft = normalize_draft(req);

        if let Err(err) = draft.validate() {
            self.record_error(format!("Failed to create product: {err}"))
                .await;
            return None;
        }

        match self.command.create_product(&draft).await {
            Ok(product) => {
                info!("✅ Created product: {} (ID: {})", product.name, product.product_id);
                self.cache.write().await.insert(0, product.clone());
                Some(ProductResponse::from(product))
            }
            Err(err) => {
                self.record_error(format!("Failed to create product: {err}"))
                    .await;
                None
            }
        }
    }

    /// Partial update. The patch is stamped with a fresh `updated_at` before
    /// it goes out; on success the cached entry is replaced in place, its
    /// position unchanged.
    pub async fn update(&self, mut req: UpdateProductRequest) -> Option<ProductResponse> {
        if let Err(err) = req.validate() {
            self.record_error(format!("Failed to update product: {err}"))
                .await;
            return None;
        }

        req.updated_at = Some(Utc::now().naive_utc());

        match self.command.update_product(&req).await {
            Ok(product) => {
                info!("✅ Updated product with ID: {}", product.product_id);
                self.replace_cached(product.clone()).await;
                Some(ProductResponse::from(product))
            }
            Err(err) => {
                self.record_error(format!("Failed to update product: {err}"))
                    .await;
                None
            }
        }
    }

    /// Deletes remotely first; the cache entry is only removed once the
    /// remote store confirms.
    pub async fn delete(&self, id: i32) -> bool {
        match self.command.delete_product(id).await {
            Ok(()) => {
                info!("✅ Deleted product with ID: {id}");
                self.cache.write().await.retain(|p| p.product_id != id);
                true
            }
            Err(err) => {
                self.record_error(format!("Failed to delete product: {err}"))
                    .await;
                false
            }
        }
    }

    /// Fetches a single record from the remote store; the cache is not
    /// consulted or touched.
    pub async fn get_one(&self, id: i32) -> Option<ProductResponse> {
        match self.query.find_by_id(id).await {
            Ok(Some(product)) => Some(ProductResponse::from(product)),
            Ok(None) => {
                self.record_error(format!("Failed to fetch product: no product with ID {id}"))
                    .await;
                None
            }
            Err(err) => {
                self.record_error(format!("Failed to fetch product: {err}"))
                    .await;
                None
            }
        }
    }

    /// Remote search: case-insensitive substring over name, description and
    /// category, optionally restricted to an exact category. Returns the
    /// remote result directly without touching the cache.
    pub async fn search(&self, req: &SearchProductsRequest) -> Vec<ProductResponse> {
        match self.query.search(req).await {
            Ok(products) => products.into_iter().map(ProductResponse::from).collect(),
            Err(err) => {
                self.record_error(format!("Failed to search products: {err}"))
                    .await;
                Vec::new()
            }
        }
    }

    pub async fn list_by_category(&self, category: &str) -> Vec<ProductResponse> {
        match self.query.find_by_category(category).await {
            Ok(products) => products.into_iter().map(ProductResponse::from).collect(),
            Err(err) => {
                self.record_error(format!("Failed to fetch products by category: {err}"))
                    .await;
                Vec::new()
            }
        }
    }

    /// Distinct category values in ascending lexical order.
    pub async fn list_categories(&self) -> Vec<String> {
        match self.query.categories().await {
            Ok(values) => {
                let unique: std::collections::BTreeSet<String> = values.into_iter().collect();
                unique.into_iter().collect()
            }
            Err(err) => {
                self.record_error(format!("Failed to fetch categories: {err}"))
                    .await;
                Vec::new()
            }
        }
    }

    /// Convenience update restricted to the stock field, same
    /// confirm-then-mutate cache policy as `update`.
    pub async fn set_stock(&self, id: i32, stock: i32) -> bool {
        info!("📈 Setting stock for product ID={id} to {stock}");

        let mut req = UpdateProductRequest::for_id(id);
        req.stock = Some(stock);

        self.update(req).await.is_some()
    }

    /// Snapshot of the cached collection, most recently created first.
    pub async fn products(&self) -> Vec<Product> {
        self.cache.read().await.clone()
    }

    /// False once the first load attempt has settled, success or not.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// The most recent operation failure, overwritten by each new one and
    /// cleared by `load`. Translating it into user-facing notifications is
    /// the UI layer's job.
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    async fn record_error(&self, message: String) {
        error!("❌ {message}");
        *self.last_error.write().await = Some(message);
    }

    async fn replace_cached(&self, product: Product) {
        let mut cache = self.cache.write().await;
        if let Some(slot) = cache
            .iter_mut()
            .find(|p| p.product_id == product.product_id)
        {
            *slot = product;
        }
    }
}

/// Applies the draft defaults before the remote write: text fields that are
/// empty after trimming become absent, missing stock becomes 0.
fn normalize_draft(req: CreateProductRequest) -> CreateProductRequest {
    CreateProductRequest {
        name: req.name.trim().to_string(),
        description: req.description.and_then(trimmed_non_empty),
        price: req.price,
        stock: Some(req.stock.unwrap_or(0)),
        category: req.category.trim().to_string(),
        sku: req.sku.and_then(trimmed_non_empty),
        image_url: req.image_url.and_then(trimmed_non_empty),
    }
}

fn trimmed_non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
