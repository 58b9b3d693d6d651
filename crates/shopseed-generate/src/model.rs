use serde::{Deserialize, Serialize};

use shopseed_core::EntityId;

/// How many entities a seeding run creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogPlan {
    pub categories: u32,
    pub tags: u32,
    pub products: u32,
    /// Reviews created for every product.
    pub reviews_per_product: u32,
}

impl Default for CatalogPlan {
    fn default() -> Self {
        Self {
            categories: 5,
            tags: 10,
            products: 20,
            reviews_per_product: 2,
        }
    }
}

/// Ids created by a seeding run, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    pub session_id: String,
    pub category_ids: Vec<EntityId>,
    pub tag_ids: Vec<EntityId>,
    pub product_ids: Vec<EntityId>,
    pub review_ids: Vec<EntityId>,
    pub duration_ms: u64,
}

impl CatalogReport {
    pub fn new(session_id: String) -> Self {
        Self {
            session_id,
            ..Self::default()
        }
    }

    pub fn total(&self) -> usize {
        self.category_ids.len() + self.tag_ids.len() + self.product_ids.len() + self.review_ids.len()
    }
}
