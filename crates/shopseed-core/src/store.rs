use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::EntityFields;

/// Error payload returned by a store that refused a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRejection {
    /// Machine-readable error code (e.g. `term_exists`).
    pub code: String,
    /// Human-readable message, surfaced to callers verbatim.
    pub message: String,
}

impl StoreRejection {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Outcome of a single create request.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreResponse {
    /// The store accepted the entity; the body should carry an `id`.
    Created(Value),
    Rejected(StoreRejection),
}

impl StoreResponse {
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected(StoreRejection::new(code, message))
    }
}

/// Persistence service that validates entities and assigns their ids.
///
/// A single capability covers every entity kind; implementations dispatch on
/// the [`EntityFields`] variant to reach their per-kind create call.
pub trait CatalogStore {
    fn create(&mut self, fields: &EntityFields) -> StoreResponse;
}

impl<T: CatalogStore + ?Sized> CatalogStore for &mut T {
    fn create(&mut self, fields: &EntityFields) -> StoreResponse {
        (**self).create(fields)
    }
}

impl<T: CatalogStore + ?Sized> CatalogStore for Box<T> {
    fn create(&mut self, fields: &EntityFields) -> StoreResponse {
        (**self).create(fields)
    }
}
