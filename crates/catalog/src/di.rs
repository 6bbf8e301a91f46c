use crate::{
    abstract_trait::DynAuthGate,
    repository::{ProductCommandRepository, ProductQueryRepository, SharedCollection},
    service::{BulkImportService, ProductStoreService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_store: Arc<ProductStoreService>,
    pub bulk_import: BulkImportService,
    pub auth_gate: DynAuthGate,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_store", &"ProductStoreService")
            .field("bulk_import", &"BulkImportService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(collection: SharedCollection, auth_gate: DynAuthGate) -> Self {
        let query_repo = Arc::new(ProductQueryRepository::new(collection.clone()));
        let command_repo = Arc::new(ProductCommandRepository::new(collection));

        let product_store = Arc::new(ProductStoreService::new(query_repo, command_repo));

        let bulk_import = BulkImportService::new(product_store.clone());

        Self {
            product_store,
            bulk_import,
            auth_gate,
        }
    }
}
