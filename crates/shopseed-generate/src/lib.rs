//! Dependency-aware catalog fixture generation for shopseed.
//!
//! Composes reviews, categories, tags and products from randomized content
//! and caller-supplied id pools, then submits them to a catalog store.

pub mod composer;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod model;
pub mod sampler;
pub mod store;
pub mod telemetry;

pub use composer::{ComposeParams, EntityComposer, ProductPools};
pub use config::{GeneratorConfig, UniqueScope};
pub use engine::CatalogGenerator;
pub use errors::{ContentError, GenerateError};
pub use faker_rs::{FakerContentProvider, LocaleKey};
pub use generators::{ContentGenerator, ContentProvider, ParagraphContentGenerator, UniqueLedger};
pub use model::{CatalogPlan, CatalogReport};
pub use store::InMemoryCatalogStore;
pub use telemetry::{LogFormat, init_tracing};
