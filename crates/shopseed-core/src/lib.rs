//! Core contracts for shopseed.
//!
//! This crate defines the entity ids, field-sets and catalog store contract
//! shared by the generator and any store implementation.

pub mod error;
pub mod fields;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use fields::{CategoryFields, EntityFields, ProductFields, ReviewFields, TagFields};
pub use store::{CatalogStore, StoreRejection, StoreResponse};
pub use types::{EntityId, EntityKind, IdRef, ProductStatus, ProductType};
pub use validation::{MAX_RATING, validate_fields};
