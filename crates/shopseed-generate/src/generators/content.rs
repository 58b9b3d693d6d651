use shopseed_core::EntityId;

use crate::errors::ContentError;
use crate::generators::ContentProvider;
use crate::sampler::sample_one;

/// Produces rich body text for descriptions.
pub trait ContentGenerator {
    /// Generate between `min_paragraphs` and `max_paragraphs` paragraphs,
    /// optionally illustrated with ids from `image_ids`.
    fn generate_body(
        &mut self,
        provider: &mut dyn ContentProvider,
        image_ids: &[EntityId],
        min_paragraphs: u32,
        max_paragraphs: u32,
    ) -> Result<String, ContentError>;
}

/// HTML paragraphs with occasional image blocks.
#[derive(Debug, Clone)]
pub struct ParagraphContentGenerator {
    image_chance: u8,
}

impl ParagraphContentGenerator {
    pub fn new(image_chance: u8) -> Self {
        Self {
            image_chance: image_chance.min(100),
        }
    }
}

impl Default for ParagraphContentGenerator {
    fn default() -> Self {
        Self::new(30)
    }
}

impl ContentGenerator for ParagraphContentGenerator {
    fn generate_body(
        &mut self,
        provider: &mut dyn ContentProvider,
        image_ids: &[EntityId],
        min_paragraphs: u32,
        max_paragraphs: u32,
    ) -> Result<String, ContentError> {
        let count = provider.number_between(i64::from(min_paragraphs), i64::from(max_paragraphs))?;
        let mut blocks = Vec::with_capacity(count as usize);
        for _ in 0..count {
            blocks.push(format!("<p>{}</p>", provider.paragraph()));
            if !image_ids.is_empty() && provider.boolean(self.image_chance) {
                let id = sample_one(provider, image_ids)?;
                blocks.push(format!("<figure data-attachment-id=\"{id}\"></figure>"));
            }
        }
        Ok(blocks.join("\n\n"))
    }
}
