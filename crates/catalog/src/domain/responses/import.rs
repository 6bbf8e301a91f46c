use serde::{Deserialize, Serialize};

/// Aggregate result of a bulk CSV import. `dropped_rows` counts rows the
/// parser discarded because their field count did not match the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkImportSummary {
    #[serde(rename = "success_count")]
    pub success_count: usize,
    #[serde(rename = "failure_count")]
    pub failure_count: usize,
    #[serde(rename = "dropped_rows")]
    pub dropped_rows: usize,
}
