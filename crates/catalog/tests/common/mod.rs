#![allow(dead_code)]

use async_trait::async_trait;
use catalog::{
    abstract_trait::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    domain::requests::{CreateProductRequest, SearchProductsRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
    repository::{
        ProductCollection, ProductCommandRepository, ProductQueryRepository, SharedCollection,
    },
    service::ProductStoreService,
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

pub fn draft(name: &str, category: &str, price: f64) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: None,
        price,
        stock: Some(10),
        category: category.to_string(),
        sku: None,
        image_url: None,
    }
}

/// Command repository that can simulate remote outages: either every call
/// fails, or one specific create invocation (1-based) fails.
pub struct FlakyCommandRepository {
    inner: ProductCommandRepository,
    pub fail_all: AtomicBool,
    creates_seen: AtomicUsize,
    fail_on_create: Option<usize>,
}

impl FlakyCommandRepository {
    pub fn new(collection: SharedCollection) -> Self {
        Self {
            inner: ProductCommandRepository::new(collection),
            fail_all: AtomicBool::new(false),
            creates_seen: AtomicUsize::new(0),
            fail_on_create: None,
        }
    }

    pub fn failing_on_create(collection: SharedCollection, nth: usize) -> Self {
        Self {
            fail_on_create: Some(nth),
            ..Self::new(collection)
        }
    }

    pub fn creates_seen(&self) -> usize {
        self.creates_seen.load(Ordering::SeqCst)
    }

    fn outage(&self) -> RepositoryError {
        RepositoryError::Unavailable("simulated outage".to_string())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for FlakyCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let call = self.creates_seen.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_all.load(Ordering::SeqCst) || self.fail_on_create == Some(call) {
            return Err(self.outage());
        }
        self.inner.create_product(req).await
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(self.outage());
        }
        self.inner.update_product(req).await
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(self.outage());
        }
        self.inner.delete_product(id).await
    }
}

/// Query repository with an outage switch.
pub struct FlakyQueryRepository {
    inner: ProductQueryRepository,
    pub fail_all: AtomicBool,
}

impl FlakyQueryRepository {
    pub fn new(collection: SharedCollection) -> Self {
        Self {
            inner: ProductQueryRepository::new(collection),
            fail_all: AtomicBool::new(false),
        }
    }

    fn outage(&self) -> RepositoryError {
        RepositoryError::Unavailable("simulated outage".to_string())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for FlakyQueryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(self.outage());
        }
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(self.outage());
        }
        self.inner.find_by_id(id).await
    }

    async fn search(&self, req: &SearchProductsRequest) -> Result<Vec<Product>, RepositoryError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(self.outage());
        }
        self.inner.search(req).await
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(self.outage());
        }
        self.inner.find_by_category(category).await
    }

    async fn categories(&self) -> Result<Vec<String>, RepositoryError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(self.outage());
        }
        self.inner.categories().await
    }
}

pub struct TestHarness {
    pub store: Arc<ProductStoreService>,
    pub query: Arc<FlakyQueryRepository>,
    pub command: Arc<FlakyCommandRepository>,
}

pub fn harness() -> TestHarness {
    harness_with(None)
}

pub fn harness_failing_on_create(nth: usize) -> TestHarness {
    harness_with(Some(nth))
}

fn harness_with(fail_on_create: Option<usize>) -> TestHarness {
    let collection = ProductCollection::shared();

    let query = Arc::new(FlakyQueryRepository::new(collection.clone()));
    let command = Arc::new(match fail_on_create {
        Some(nth) => FlakyCommandRepository::failing_on_create(collection, nth),
        None => FlakyCommandRepository::new(collection),
    });

    let store = Arc::new(ProductStoreService::new(query.clone(), command.clone()));

    TestHarness {
        store,
        query,
        command,
    }
}
