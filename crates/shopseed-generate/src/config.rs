use std::path::Path;

use serde::{Deserialize, Serialize};

use shopseed_core::{EntityKind, MAX_RATING};

use crate::errors::GenerateError;
use crate::faker_rs::locales::LocaleKey;

/// Mask expanded into a product SKU after shuffling (`#` digit, `?` letter).
pub const DEFAULT_SKU_PATTERN: &str = "#?#?#?#?#?#?";
/// Retries the uniqueness qualifier makes before giving up.
pub const DEFAULT_UNIQUE_MAX_ATTEMPTS: u32 = 10_000;

/// Inclusive integer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

/// Inclusive paragraph-count bounds for generated body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRange {
    pub min: u32,
    pub max: u32,
}

impl ParagraphRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Domain in which catch-phrase names must be unique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniqueScope {
    /// One ledger for categories, tags and products together.
    #[default]
    Shared,
    /// A separate ledger per entity kind.
    PerKind,
}

impl UniqueScope {
    /// Ledger key used for names of the given kind.
    pub fn name_scope(self, kind: EntityKind) -> String {
        match self {
            Self::Shared => "name".to_string(),
            Self::PerKind => format!("name.{kind}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    pub rating: IntRange,
    /// Percent chance a review is marked verified.
    pub verified_chance: u8,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            rating: IntRange::new(0, i64::from(MAX_RATING)),
            verified_chance: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermConfig {
    pub paragraphs: ParagraphRange,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            paragraphs: ParagraphRange::new(1, 3),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductConfig {
    pub paragraphs: ParagraphRange,
    pub price: IntRange,
    /// Percent chance a product is featured.
    pub featured_chance: u8,
    pub sku_pattern: String,
    pub max_images: usize,
    pub max_categories: usize,
    pub max_tags: usize,
    pub max_brands: usize,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            paragraphs: ParagraphRange::new(3, 6),
            price: IntRange::new(10, 100),
            featured_chance: 10,
            sku_pattern: DEFAULT_SKU_PATTERN.to_string(),
            max_images: 3,
            max_categories: 2,
            max_tags: 3,
            max_brands: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Percent chance an image block follows a paragraph.
    pub image_chance: u8,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self { image_chance: 30 }
    }
}

/// Settings for one catalog generation session.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the random source; a random seed is drawn when absent.
    pub seed: Option<u64>,
    pub locale: LocaleKey,
    pub unique_scope: UniqueScope,
    pub unique_max_attempts: u32,
    pub review: ReviewConfig,
    pub category: TermConfig,
    pub tag: TermConfig,
    pub product: ProductConfig,
    pub content: ContentConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            locale: LocaleKey::default(),
            unique_scope: UniqueScope::default(),
            unique_max_attempts: DEFAULT_UNIQUE_MAX_ATTEMPTS,
            review: ReviewConfig::default(),
            category: TermConfig::default(),
            tag: TermConfig::default(),
            product: ProductConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, GenerateError> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.unique_max_attempts == 0 {
            return invalid("unique_max_attempts must be > 0");
        }

        let rating = self.review.rating;
        check_range("review.rating", rating)?;
        if rating.min < 0 || rating.max > i64::from(MAX_RATING) {
            return invalid(&format!("review.rating must be within 0..={MAX_RATING}"));
        }
        check_chance("review.verified_chance", self.review.verified_chance)?;

        check_paragraphs("category.paragraphs", self.category.paragraphs)?;
        check_paragraphs("tag.paragraphs", self.tag.paragraphs)?;

        let product = &self.product;
        check_paragraphs("product.paragraphs", product.paragraphs)?;
        check_range("product.price", product.price)?;
        if product.price.min < 0 {
            return invalid("product.price min must be >= 0");
        }
        if u32::try_from(product.price.max).is_err() {
            return invalid("product.price max must fit u32");
        }
        check_chance("product.featured_chance", product.featured_chance)?;
        if product.sku_pattern.trim().is_empty() {
            return invalid("product.sku_pattern must not be empty");
        }
        if !product
            .sku_pattern
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '#' | '?' | '*'))
        {
            return invalid("product.sku_pattern may only hold alphanumerics and '#', '?', '*'");
        }
        for (name, cap) in [
            ("product.max_images", product.max_images),
            ("product.max_categories", product.max_categories),
            ("product.max_tags", product.max_tags),
            ("product.max_brands", product.max_brands),
        ] {
            if cap == 0 {
                return invalid(&format!("{name} must be > 0"));
            }
        }

        check_chance("content.image_chance", self.content.image_chance)
    }
}

fn check_range(name: &str, range: IntRange) -> Result<(), GenerateError> {
    if range.min > range.max {
        return invalid(&format!("{name} min must be <= max"));
    }
    Ok(())
}

fn check_paragraphs(name: &str, range: ParagraphRange) -> Result<(), GenerateError> {
    if range.min == 0 {
        return invalid(&format!("{name} min must be > 0"));
    }
    if range.min > range.max {
        return invalid(&format!("{name} min must be <= max"));
    }
    Ok(())
}

fn check_chance(name: &str, chance: u8) -> Result<(), GenerateError> {
    if chance > 100 {
        return invalid(&format!("{name} must be a percentage (0..=100)"));
    }
    Ok(())
}

fn invalid<T>(message: &str) -> Result<T, GenerateError> {
    Err(GenerateError::InvalidConfig(message.to_string()))
}
