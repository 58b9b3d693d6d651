use serde::{Deserialize, Serialize};

use shopseed_core::{
    CategoryFields, EntityFields, EntityId, EntityKind, IdRef, ProductFields, ProductStatus,
    ProductType, ReviewFields, TagFields,
};

use crate::config::GeneratorConfig;
use crate::errors::ContentError;
use crate::generators::{ContentGenerator, ContentProvider, claim_unique};
use crate::sampler::{sample_one, sample_optional};

/// Ledger scope for product SKUs.
pub const SKU_SCOPE: &str = "sku";

/// Candidate id pools a product may reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPools {
    pub attachments: Vec<EntityId>,
    pub categories: Vec<EntityId>,
    pub tags: Vec<EntityId>,
    pub brands: Vec<EntityId>,
}

/// Kind-specific inputs for [`EntityComposer::compose`].
#[derive(Debug, Clone, Copy)]
pub enum ComposeParams<'a> {
    Review { product_id: EntityId },
    Category { attachments: &'a [EntityId] },
    Tag,
    Product(&'a ProductPools),
}

impl ComposeParams<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Review { .. } => EntityKind::Review,
            Self::Category { .. } => EntityKind::Category,
            Self::Tag => EntityKind::Tag,
            Self::Product(_) => EntityKind::Product,
        }
    }
}

/// Builds field-sets from fixed markers, random scalars and sampled references.
///
/// Composition only fails when the provider or content generator does.
#[derive(Debug, Clone, Copy)]
pub struct EntityComposer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> EntityComposer<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn compose(
        &self,
        provider: &mut dyn ContentProvider,
        content: &mut dyn ContentGenerator,
        params: ComposeParams<'_>,
    ) -> Result<EntityFields, ContentError> {
        let fields: EntityFields = match params {
            ComposeParams::Review { product_id } => {
                self.compose_review(provider, product_id)?.into()
            }
            ComposeParams::Category { attachments } => {
                self.compose_category(provider, content, attachments)?.into()
            }
            ComposeParams::Tag => self.compose_tag(provider, content)?.into(),
            ComposeParams::Product(pools) => self.compose_product(provider, content, pools)?.into(),
        };
        Ok(fields)
    }

    pub fn compose_review(
        &self,
        provider: &mut dyn ContentProvider,
        product_id: EntityId,
    ) -> Result<ReviewFields, ContentError> {
        let settings = &self.config.review;
        let rating = provider.number_between(settings.rating.min, settings.rating.max)?;
        let rating = u8::try_from(rating).map_err(|_| ContentError::InvalidRange {
            min: settings.rating.min,
            max: settings.rating.max,
        })?;

        Ok(ReviewFields {
            product_id,
            review: provider.paragraph(),
            reviewer: provider.name(),
            reviewer_email: provider.email(),
            rating,
            verified: provider.boolean(settings.verified_chance),
        })
    }

    pub fn compose_category(
        &self,
        provider: &mut dyn ContentProvider,
        content: &mut dyn ContentGenerator,
        attachments: &[EntityId],
    ) -> Result<CategoryFields, ContentError> {
        let name = self.unique_name(provider, EntityKind::Category)?;
        let paragraphs = self.config.category.paragraphs;
        let description =
            content.generate_body(provider, attachments, paragraphs.min, paragraphs.max)?;
        let image = if attachments.is_empty() {
            None
        } else {
            Some(IdRef::from(sample_one(provider, attachments)?))
        };

        Ok(CategoryFields {
            name,
            description,
            image,
        })
    }

    /// Tag descriptions are never illustrated, so the content generator gets
    /// an empty image pool.
    pub fn compose_tag(
        &self,
        provider: &mut dyn ContentProvider,
        content: &mut dyn ContentGenerator,
    ) -> Result<TagFields, ContentError> {
        let name = self.unique_name(provider, EntityKind::Tag)?;
        let paragraphs = self.config.tag.paragraphs;
        let description = content.generate_body(provider, &[], paragraphs.min, paragraphs.max)?;
        Ok(TagFields { name, description })
    }

    pub fn compose_product(
        &self,
        provider: &mut dyn ContentProvider,
        content: &mut dyn ContentGenerator,
        pools: &ProductPools,
    ) -> Result<ProductFields, ContentError> {
        let settings = &self.config.product;
        let name = self.unique_name(provider, EntityKind::Product)?;
        let description = content.generate_body(
            provider,
            &pools.attachments,
            settings.paragraphs.min,
            settings.paragraphs.max,
        )?;
        let featured = provider.boolean(settings.featured_chance);

        // The ledger records the uppercased SKU, not the raw expansion.
        let template = provider.shuffle(&settings.sku_pattern);
        let sku = claim_unique(provider, SKU_SCOPE, |provider| {
            Ok(provider.pattern(&template)?.to_uppercase())
        })?;

        let price = provider.number_between(settings.price.min, settings.price.max)?;
        let regular_price = u32::try_from(price).map_err(|_| ContentError::InvalidRange {
            min: settings.price.min,
            max: settings.price.max,
        })?;

        let images = sample_optional(provider, &pools.attachments, settings.max_images)?;
        let categories = sample_optional(provider, &pools.categories, settings.max_categories)?;
        let tags = sample_optional(provider, &pools.tags, settings.max_tags)?;
        let brands = sample_optional(provider, &pools.brands, settings.max_brands)?;

        Ok(ProductFields {
            name,
            description,
            status: ProductStatus::Publish,
            product_type: ProductType::Simple,
            featured,
            sku,
            regular_price,
            images: images.map(to_refs),
            categories: categories.map(to_refs),
            tags: tags.map(to_refs),
            brands,
        })
    }

    fn unique_name(
        &self,
        provider: &mut dyn ContentProvider,
        kind: EntityKind,
    ) -> Result<String, ContentError> {
        let scope = self.config.unique_scope.name_scope(kind);
        provider.unique_catch_phrase(&scope)
    }
}

fn to_refs(ids: Vec<EntityId>) -> Vec<IdRef> {
    ids.into_iter().map(IdRef::from).collect()
}
