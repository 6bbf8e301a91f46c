use serde::{Deserialize, Serialize};

/// One entry of the storefront category strip: a category name and how many
/// products currently carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}
