use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::fields::{CategoryFields, EntityFields, ProductFields, ReviewFields, TagFields};
use crate::types::EntityId;

/// Highest rating a review may carry.
pub const MAX_RATING: u8 = 5;

/// Validate a field-set against the catalog contract.
///
/// This checks:
/// - names and SKUs are non-empty
/// - review ratings are within `0..=MAX_RATING`
/// - present reference lists are non-empty and hold no duplicate ids
pub fn validate_fields(fields: &EntityFields) -> Result<()> {
    match fields {
        EntityFields::Review(review) => validate_review(review),
        EntityFields::Category(category) => validate_category(category),
        EntityFields::Tag(tag) => validate_tag(tag),
        EntityFields::Product(product) => validate_product(product),
    }
}

fn validate_review(review: &ReviewFields) -> Result<()> {
    if review.rating > MAX_RATING {
        return Err(Error::InvalidFieldSet(format!(
            "review rating {} exceeds {MAX_RATING}",
            review.rating
        )));
    }
    require_text("review.reviewer", &review.reviewer)?;
    require_text("review.reviewer_email", &review.reviewer_email)
}

fn validate_category(category: &CategoryFields) -> Result<()> {
    require_text("category.name", &category.name)
}

fn validate_tag(tag: &TagFields) -> Result<()> {
    require_text("tag.name", &tag.name)
}

fn validate_product(product: &ProductFields) -> Result<()> {
    require_text("product.name", &product.name)?;
    require_text("product.sku", &product.sku)?;
    if !product.sku.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        return Err(Error::InvalidFieldSet(format!(
            "product.sku '{}' must be alphanumeric",
            product.sku
        )));
    }

    if product.images.is_some() {
        require_distinct("product.images", &product.image_ids())?;
    }
    if product.categories.is_some() {
        require_distinct("product.categories", &product.category_ids())?;
    }
    if product.tags.is_some() {
        require_distinct("product.tags", &product.tag_ids())?;
    }
    if let Some(brands) = &product.brands {
        require_distinct("product.brands", brands)?;
    }
    Ok(())
}

fn require_text(path: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidFieldSet(format!("{path} must not be empty")));
    }
    Ok(())
}

fn require_distinct(path: &str, ids: &[EntityId]) -> Result<()> {
    if ids.is_empty() {
        return Err(Error::InvalidFieldSet(format!(
            "{path} must be omitted rather than empty"
        )));
    }
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(*id) {
            return Err(Error::InvalidFieldSet(format!(
                "duplicate id {id} in {path}"
            )));
        }
    }
    Ok(())
}
