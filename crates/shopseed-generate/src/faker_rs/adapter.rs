use fake::Fake;
use fake::faker::company::raw::CatchPhrase;
use fake::faker::internet::raw::SafeEmail;
use fake::faker::lorem::raw::Paragraph;
use fake::faker::name::raw::Name;
use fake::locales::{EN, PT_BR};
use rand::seq::{SliceRandom, index};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GeneratorConfig;
use crate::errors::ContentError;
use crate::faker_rs::locales::LocaleKey;
use crate::generators::pattern::expand_pattern;
use crate::generators::{ContentProvider, UniqueLedger};

const SENTENCES_PER_PARAGRAPH: std::ops::Range<usize> = 3..7;

macro_rules! localized {
    ($provider:ident, $faker:ident $(, $arg:expr)*) => {
        match $provider.locale {
            LocaleKey::EnUs => {
                $faker(EN $(, $arg)*).fake_with_rng::<String, _>(&mut $provider.rng)
            }
            LocaleKey::PtBr => {
                $faker(PT_BR $(, $arg)*).fake_with_rng::<String, _>(&mut $provider.rng)
            }
        }
    };
}

/// [`ContentProvider`] backed by the `fake` crate and a seeded ChaCha RNG.
#[derive(Debug, Clone)]
pub struct FakerContentProvider {
    rng: ChaCha8Rng,
    seed: u64,
    locale: LocaleKey,
    ledger: UniqueLedger,
}

impl FakerContentProvider {
    pub fn new(config: &GeneratorConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            locale: config.locale,
            ledger: UniqueLedger::new(config.unique_max_attempts),
        }
    }

    pub fn from_seed(seed: u64, locale: LocaleKey) -> Self {
        Self::new(&GeneratorConfig {
            seed: Some(seed),
            locale,
            ..GeneratorConfig::default()
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn locale(&self) -> LocaleKey {
        self.locale
    }

    pub fn ledger(&self) -> &UniqueLedger {
        &self.ledger
    }
}

impl ContentProvider for FakerContentProvider {
    fn paragraph(&mut self) -> String {
        localized!(self, Paragraph, SENTENCES_PER_PARAGRAPH)
    }

    fn name(&mut self) -> String {
        localized!(self, Name)
    }

    fn email(&mut self) -> String {
        localized!(self, SafeEmail)
    }

    fn catch_phrase(&mut self) -> String {
        localized!(self, CatchPhrase)
    }

    fn number_between(&mut self, min: i64, max: i64) -> Result<i64, ContentError> {
        if min > max {
            return Err(ContentError::InvalidRange { min, max });
        }
        Ok(self.rng.random_range(min..=max))
    }

    fn boolean(&mut self, chance_percent: u8) -> bool {
        let chance = f64::from(chance_percent.min(100)) / 100.0;
        self.rng.random_bool(chance)
    }

    fn random_index(&mut self, len: usize) -> Result<usize, ContentError> {
        if len == 0 {
            return Err(ContentError::EmptyPool);
        }
        Ok(self.rng.random_range(0..len))
    }

    fn random_indices(&mut self, len: usize, count: usize) -> Result<Vec<usize>, ContentError> {
        if count > len {
            return Err(ContentError::InvalidRange {
                min: count as i64,
                max: len as i64,
            });
        }
        Ok(index::sample(&mut self.rng, len, count).into_vec())
    }

    fn shuffle(&mut self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        chars.shuffle(&mut self.rng);
        chars.into_iter().collect()
    }

    fn pattern(&mut self, pattern: &str) -> Result<String, ContentError> {
        expand_pattern(pattern, &mut self.rng)
    }

    fn ledger_mut(&mut self) -> &mut UniqueLedger {
        &mut self.ledger
    }
}
