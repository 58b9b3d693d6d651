use std::time::Instant;

use tracing::{info, warn};

use shopseed_core::{CatalogStore, EntityId};

use crate::composer::{EntityComposer, ProductPools};
use crate::config::GeneratorConfig;
use crate::dispatch::create;
use crate::errors::GenerateError;
use crate::faker_rs::FakerContentProvider;
use crate::generators::{ContentGenerator, ContentProvider, ParagraphContentGenerator};
use crate::model::{CatalogPlan, CatalogReport};

/// Entry point for generating catalog entities into a store.
///
/// Each `generate_*` call composes one field-set, submits it once and returns
/// the assigned id. Calls are sequential; nothing is rolled back when a later
/// call fails.
#[derive(Debug)]
pub struct CatalogGenerator<S, P = FakerContentProvider, C = ParagraphContentGenerator> {
    config: GeneratorConfig,
    store: S,
    provider: P,
    content: C,
    session_id: String,
}

impl<S: CatalogStore> CatalogGenerator<S> {
    /// Generator using the faker-backed provider and paragraph content.
    pub fn new(config: GeneratorConfig, store: S) -> Result<Self, GenerateError> {
        config.validate()?;
        let provider = FakerContentProvider::new(&config);
        let content = ParagraphContentGenerator::new(config.content.image_chance);
        info!(seed = provider.seed(), locale = %provider.locale(), "catalog generator ready");
        Self::with_collaborators(config, store, provider, content)
    }
}

impl<S, P, C> CatalogGenerator<S, P, C>
where
    S: CatalogStore,
    P: ContentProvider,
    C: ContentGenerator,
{
    pub fn with_collaborators(
        config: GeneratorConfig,
        store: S,
        provider: P,
        content: C,
    ) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            provider,
            content,
            session_id: new_session_id(),
        })
    }

    /// Begin a new session: forget every unique value handed out so far.
    pub fn start_session(&mut self) -> &str {
        self.provider.reset_unique();
        self.session_id = new_session_id();
        info!(session_id = %self.session_id, "generation session started");
        &self.session_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn generate_review(&mut self, product_id: EntityId) -> Result<EntityId, GenerateError> {
        let composer = EntityComposer::new(&self.config);
        let fields = composer.compose_review(&mut self.provider, product_id)?;
        create(&mut self.store, &fields.into())
    }

    pub fn generate_category(&mut self, attachments: &[EntityId]) -> Result<EntityId, GenerateError> {
        let composer = EntityComposer::new(&self.config);
        let fields = composer.compose_category(&mut self.provider, &mut self.content, attachments)?;
        create(&mut self.store, &fields.into())
    }

    pub fn generate_tag(&mut self) -> Result<EntityId, GenerateError> {
        let composer = EntityComposer::new(&self.config);
        let fields = composer.compose_tag(&mut self.provider, &mut self.content)?;
        create(&mut self.store, &fields.into())
    }

    /// Referenced categories, tags, brands and attachments must already
    /// exist; none are created here.
    pub fn generate_product(&mut self, pools: &ProductPools) -> Result<EntityId, GenerateError> {
        let composer = EntityComposer::new(&self.config);
        let fields = composer.compose_product(&mut self.provider, &mut self.content, pools)?;
        create(&mut self.store, &fields.into())
    }

    /// Seed a whole catalog in dependency order: categories, tags, products,
    /// then reviews for every product. Stops at the first failure; entities
    /// created before it stay in the store.
    pub fn generate_catalog(
        &mut self,
        plan: &CatalogPlan,
        attachments: &[EntityId],
        brands: &[EntityId],
    ) -> Result<CatalogReport, GenerateError> {
        let start = Instant::now();
        let mut report = CatalogReport::new(self.session_id.clone());
        info!(
            session_id = %self.session_id,
            categories = plan.categories,
            tags = plan.tags,
            products = plan.products,
            reviews_per_product = plan.reviews_per_product,
            "catalog generation started"
        );

        let outcome = self.seed_into(plan, attachments, brands, &mut report);
        report.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(()) => {
                info!(
                    session_id = %self.session_id,
                    entities = report.total(),
                    duration_ms = report.duration_ms,
                    "catalog generation completed"
                );
                Ok(report)
            }
            Err(err) => {
                warn!(
                    session_id = %self.session_id,
                    created = report.total(),
                    error = %err,
                    "catalog generation failed"
                );
                Err(err)
            }
        }
    }

    fn seed_into(
        &mut self,
        plan: &CatalogPlan,
        attachments: &[EntityId],
        brands: &[EntityId],
        report: &mut CatalogReport,
    ) -> Result<(), GenerateError> {
        for _ in 0..plan.categories {
            let id = self.generate_category(attachments)?;
            report.category_ids.push(id);
        }
        for _ in 0..plan.tags {
            let id = self.generate_tag()?;
            report.tag_ids.push(id);
        }

        let pools = ProductPools {
            attachments: attachments.to_vec(),
            categories: report.category_ids.clone(),
            tags: report.tag_ids.clone(),
            brands: brands.to_vec(),
        };
        for _ in 0..plan.products {
            let id = self.generate_product(&pools)?;
            report.product_ids.push(id);
        }

        for product_id in report.product_ids.clone() {
            for _ in 0..plan.reviews_per_product {
                let id = self.generate_review(product_id)?;
                report.review_ids.push(id);
            }
        }
        Ok(())
    }
}

fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
