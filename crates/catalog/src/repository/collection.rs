use crate::model::Product;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Backing table of the in-memory remote store. Both repository halves hold
/// the same handle.
#[derive(Debug)]
pub struct ProductCollection {
    pub(crate) rows: Vec<Product>,
    pub(crate) next_id: i32,
}

pub type SharedCollection = Arc<RwLock<ProductCollection>>;

impl ProductCollection {
    pub fn shared() -> SharedCollection {
        Arc::new(RwLock::new(Self {
            rows: Vec::new(),
            next_id: 1,
        }))
    }
}
