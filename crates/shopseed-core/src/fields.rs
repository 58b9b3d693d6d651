use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, EntityKind, IdRef, ProductStatus, ProductType};

/// Field-set for a product review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReviewFields {
    /// Reviewed product; must already exist in the store.
    pub product_id: EntityId,
    /// Review body.
    pub review: String,
    /// Reviewer display name.
    pub reviewer: String,
    pub reviewer_email: String,
    pub rating: u8,
    pub verified: bool,
}

/// Field-set for a product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryFields {
    /// Session-unique category name.
    pub name: String,
    /// Generated body text.
    pub description: String,
    /// Representative image, absent when no attachments were available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<IdRef>,
}

/// Field-set for a product tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TagFields {
    pub name: String,
    pub description: String,
}

/// Field-set for a simple product.
///
/// Reference lists are `None` when their candidate pool was empty and are
/// then left out of the serialized object entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub status: ProductStatus,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub featured: bool,
    /// Uppercase, session-unique stock keeping unit.
    pub sku: String,
    pub regular_price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<IdRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<IdRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<IdRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<EntityId>>,
}

impl ProductFields {
    pub fn image_ids(&self) -> Vec<EntityId> {
        ref_ids(self.images.as_deref())
    }

    pub fn category_ids(&self) -> Vec<EntityId> {
        ref_ids(self.categories.as_deref())
    }

    pub fn tag_ids(&self) -> Vec<EntityId> {
        ref_ids(self.tags.as_deref())
    }
}

/// A composed field-set tagged with its entity kind.
///
/// Serializes as the bare field object so it can be handed to a store as the
/// request body.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum EntityFields {
    Review(ReviewFields),
    Category(CategoryFields),
    Tag(TagFields),
    Product(ProductFields),
}

impl EntityFields {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Review(_) => EntityKind::Review,
            Self::Category(_) => EntityKind::Category,
            Self::Tag(_) => EntityKind::Tag,
            Self::Product(_) => EntityKind::Product,
        }
    }

    /// Unique name of the entity, if its kind carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Review(_) => None,
            Self::Category(fields) => Some(&fields.name),
            Self::Tag(fields) => Some(&fields.name),
            Self::Product(fields) => Some(&fields.name),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl From<ReviewFields> for EntityFields {
    fn from(fields: ReviewFields) -> Self {
        Self::Review(fields)
    }
}

impl From<CategoryFields> for EntityFields {
    fn from(fields: CategoryFields) -> Self {
        Self::Category(fields)
    }
}

impl From<TagFields> for EntityFields {
    fn from(fields: TagFields) -> Self {
        Self::Tag(fields)
    }
}

impl From<ProductFields> for EntityFields {
    fn from(fields: ProductFields) -> Self {
        Self::Product(fields)
    }
}

fn ref_ids(refs: Option<&[IdRef]>) -> Vec<EntityId> {
    refs.map(|refs| refs.iter().map(|r| r.id).collect())
        .unwrap_or_default()
}
