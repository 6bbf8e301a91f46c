mod auth;
mod import;
mod store;
pub mod views;

pub use self::auth::StaticAuthGate;
pub use self::import::BulkImportService;
pub use self::store::ProductStoreService;
