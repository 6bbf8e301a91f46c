use crate::{
    csv::parse_products,
    domain::responses::BulkImportSummary,
    errors::ServiceError,
    service::ProductStoreService,
};
use std::sync::Arc;
use tracing::{error, info};

/// Sequences parsed CSV drafts through the store's create operation, one row
/// at a time. Rows run strictly sequentially: ordering and per-row failure
/// isolation matter more than throughput for this admin operation.
#[derive(Clone)]
pub struct BulkImportService {
    store: Arc<ProductStoreService>,
}

impl BulkImportService {
    pub fn new(store: Arc<ProductStoreService>) -> Self {
        Self { store }
    }

    /// Fails fast on empty input and on zero surviving rows; otherwise a
    /// failed row is counted and the rest of the batch keeps going. The
    /// caller is responsible for refreshing any full listing afterwards.
    pub async fn import(&self, raw_text: &str) -> Result<BulkImportSummary, ServiceError> {
        if raw_text.trim().is_empty() {
            return Err(ServiceError::Validation(vec![
                "Please enter CSV data to import".to_string(),
            ]));
        }

        let outcome = parse_products(raw_text)?;

        if outcome.rows.is_empty() {
            return Err(ServiceError::Custom(
                "No valid products found in CSV data".to_string(),
            ));
        }

        info!(
            "📥 Importing {} products ({} rows dropped by the parser)",
            outcome.rows.len(),
            outcome.dropped_rows
        );

        let mut summary = BulkImportSummary {
            dropped_rows: outcome.dropped_rows,
            ..Default::default()
        };

        for draft in outcome.rows {
            let name = draft.name.clone();
            match self.store.create(draft).await {
                Some(_) => summary.success_count += 1,
                None => {
                    summary.failure_count += 1;
                    error!("❌ Failed to import product: {name}");
                }
            }
        }

        info!(
            "✅ Import complete: {} imported, {} failed, {} dropped",
            summary.success_count, summary.failure_count, summary.dropped_rows
        );

        Ok(summary)
    }
}
