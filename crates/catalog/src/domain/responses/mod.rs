mod category;
mod import;
mod product;

pub use self::category::CategoryCount;
pub use self::import::BulkImportSummary;
pub use self::product::ProductResponse;
