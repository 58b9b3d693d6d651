use std::collections::BTreeSet;

use serde_json::{Value, json};
use shopseed_core::{CatalogStore, EntityFields, EntityId, EntityKind, StoreResponse};
use shopseed_generate::errors::ContentError;
use shopseed_generate::{
    CatalogGenerator, CatalogPlan, ContentProvider, FakerContentProvider, GenerateError,
    GeneratorConfig, InMemoryCatalogStore, LocaleKey, ParagraphContentGenerator, ProductPools,
    UniqueLedger, UniqueScope,
};

/// Accepts everything, answers with a fixed id and keeps the submitted bodies.
#[derive(Default)]
struct EchoStore {
    id: u64,
    submitted: Vec<Value>,
}

impl EchoStore {
    fn answering(id: u64) -> Self {
        Self {
            id,
            submitted: Vec::new(),
        }
    }
}

impl CatalogStore for EchoStore {
    fn create(&mut self, fields: &EntityFields) -> StoreResponse {
        self.submitted.push(fields.to_json().expect("json"));
        StoreResponse::Created(json!({ "id": self.id }))
    }
}

struct RejectingStore {
    message: String,
}

impl CatalogStore for RejectingStore {
    fn create(&mut self, _fields: &EntityFields) -> StoreResponse {
        StoreResponse::rejected("term_exists", self.message.clone())
    }
}

/// Delegates to an in-memory store until its budget runs out.
struct FailAfter {
    inner: InMemoryCatalogStore,
    remaining: usize,
}

impl CatalogStore for FailAfter {
    fn create(&mut self, fields: &EntityFields) -> StoreResponse {
        if self.remaining == 0 {
            return StoreResponse::rejected("rest_cannot_create", "Sorry, you are not allowed.");
        }
        self.remaining -= 1;
        self.inner.create(fields)
    }
}

/// Faker provider with pinned numbers, flags and catch phrases.
struct ScriptedProvider {
    inner: FakerContentProvider,
    ledger: UniqueLedger,
    number: Option<i64>,
    flag: Option<bool>,
    phrases: Vec<String>,
    cursor: usize,
}

impl ScriptedProvider {
    fn new(max_attempts: u32) -> Self {
        Self {
            inner: FakerContentProvider::from_seed(5, LocaleKey::EnUs),
            ledger: UniqueLedger::new(max_attempts),
            number: None,
            flag: None,
            phrases: Vec::new(),
            cursor: 0,
        }
    }

    fn with_phrases(mut self, phrases: &[&str]) -> Self {
        self.phrases = phrases.iter().map(|phrase| phrase.to_string()).collect();
        self
    }
}

impl ContentProvider for ScriptedProvider {
    fn paragraph(&mut self) -> String {
        self.inner.paragraph()
    }

    fn name(&mut self) -> String {
        self.inner.name()
    }

    fn email(&mut self) -> String {
        self.inner.email()
    }

    fn catch_phrase(&mut self) -> String {
        if self.phrases.is_empty() {
            return self.inner.catch_phrase();
        }
        let phrase = self.phrases[self.cursor % self.phrases.len()].clone();
        self.cursor += 1;
        phrase
    }

    fn number_between(&mut self, min: i64, max: i64) -> Result<i64, ContentError> {
        match self.number {
            Some(number) => Ok(number),
            None => self.inner.number_between(min, max),
        }
    }

    fn boolean(&mut self, chance_percent: u8) -> bool {
        self.flag.unwrap_or_else(|| self.inner.boolean(chance_percent))
    }

    fn random_index(&mut self, len: usize) -> Result<usize, ContentError> {
        self.inner.random_index(len)
    }

    fn random_indices(&mut self, len: usize, count: usize) -> Result<Vec<usize>, ContentError> {
        self.inner.random_indices(len, count)
    }

    fn shuffle(&mut self, value: &str) -> String {
        self.inner.shuffle(value)
    }

    fn pattern(&mut self, pattern: &str) -> Result<String, ContentError> {
        self.inner.pattern(pattern)
    }

    fn ledger_mut(&mut self) -> &mut UniqueLedger {
        &mut self.ledger
    }
}

fn seeded() -> GeneratorConfig {
    GeneratorConfig::default().with_seed(42)
}

fn scripted_generator<S: CatalogStore>(
    config: GeneratorConfig,
    store: S,
    provider: ScriptedProvider,
) -> CatalogGenerator<S, ScriptedProvider> {
    let content = ParagraphContentGenerator::new(config.content.image_chance);
    CatalogGenerator::with_collaborators(config, store, provider, content).expect("generator")
}

fn ids(values: &[u64]) -> Vec<EntityId> {
    values.iter().copied().map(EntityId).collect()
}

#[test]
fn review_is_submitted_with_exact_fields() {
    let mut provider = ScriptedProvider::new(10);
    provider.number = Some(4);
    provider.flag = Some(true);
    let mut generator = scripted_generator(seeded(), EchoStore::answering(9), provider);

    let id = generator.generate_review(EntityId(55)).expect("review");
    assert_eq!(id, EntityId(9));

    let body = &generator.store().submitted[0];
    let keys: BTreeSet<&str> = body.as_object().expect("object").keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        BTreeSet::from(["product_id", "review", "reviewer", "reviewer_email", "rating", "verified"])
    );
    assert_eq!(body["product_id"], 55);
    assert_eq!(body["rating"], 4);
    assert_eq!(body["verified"], true);
}

#[test]
fn product_with_only_attachments_references_only_images() {
    let mut generator =
        CatalogGenerator::new(seeded(), EchoStore::answering(55)).expect("generator");
    let pools = ProductPools {
        attachments: ids(&[101, 102, 103]),
        ..ProductPools::default()
    };

    let id = generator.generate_product(&pools).expect("product");
    assert_eq!(id, EntityId(55));

    let body = &generator.store().submitted[0];
    let images: Vec<u64> = body["images"]
        .as_array()
        .expect("images")
        .iter()
        .map(|image| image["id"].as_u64().expect("id"))
        .collect();
    assert!((1..=3).contains(&images.len()));
    assert!(images.iter().all(|id| [101, 102, 103].contains(id)));
    assert!(body.get("categories").is_none());
    assert!(body.get("tags").is_none());
    assert!(body.get("brands").is_none());
    assert_eq!(body["status"], "publish");
    assert_eq!(body["type"], "simple");
}

#[test]
fn store_rejection_surfaces_the_message_verbatim() {
    let store = RejectingStore {
        message: "A term with the name provided already exists.".to_string(),
    };
    let mut generator = CatalogGenerator::new(seeded(), store).expect("generator");

    let err = generator.generate_tag().expect_err("rejected");
    match err {
        GenerateError::CreationFailed(message) => {
            assert_eq!(message, "A term with the name provided already exists.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn response_without_id_is_a_creation_failure() {
    struct Silent;
    impl CatalogStore for Silent {
        fn create(&mut self, _fields: &EntityFields) -> StoreResponse {
            StoreResponse::Created(json!({ "name": "ok" }))
        }
    }

    let mut generator = CatalogGenerator::new(seeded(), Silent).expect("generator");
    assert!(matches!(
        generator.generate_category(&[]),
        Err(GenerateError::CreationFailed(_))
    ));
}

#[test]
fn repeated_catch_phrase_is_retried_until_fresh() {
    let provider = ScriptedProvider::new(10).with_phrases(&["Alpha", "Alpha", "Beta"]);
    let mut generator = scripted_generator(seeded(), EchoStore::answering(1), provider);

    generator.generate_category(&[]).expect("first");
    generator.generate_category(&[]).expect("second");

    let names: Vec<&Value> = generator
        .store()
        .submitted
        .iter()
        .map(|body| &body["name"])
        .collect();
    assert_eq!(names, vec![&json!("Alpha"), &json!("Beta")]);
}

#[test]
fn exhausted_name_space_reports_unique_exhausted() {
    let provider = ScriptedProvider::new(5).with_phrases(&["Alpha"]);
    let mut generator = scripted_generator(seeded(), EchoStore::answering(1), provider);

    generator.generate_category(&[]).expect("first");
    let err = generator.generate_category(&[]).expect_err("exhausted");
    assert!(matches!(
        err,
        GenerateError::Content(ContentError::UniqueExhausted { attempts: 5, .. })
    ));
    assert_eq!(generator.store().submitted.len(), 1);
}

#[test]
fn shared_scope_spans_categories_and_tags() {
    let provider = ScriptedProvider::new(5).with_phrases(&["Alpha"]);
    let mut generator = scripted_generator(seeded(), EchoStore::answering(1), provider);

    generator.generate_category(&[]).expect("category");
    assert!(matches!(
        generator.generate_tag(),
        Err(GenerateError::Content(ContentError::UniqueExhausted { .. }))
    ));
}

#[test]
fn per_kind_scope_allows_the_same_name_across_kinds() {
    let config = GeneratorConfig {
        unique_scope: UniqueScope::PerKind,
        ..seeded()
    };
    let provider = ScriptedProvider::new(5).with_phrases(&["Alpha"]);
    let mut generator = scripted_generator(config, EchoStore::answering(1), provider);

    generator.generate_category(&[]).expect("category");
    generator.generate_tag().expect("tag");
    assert!(generator.generate_tag().is_err());
}

#[test]
fn new_session_forgets_claimed_names() {
    let provider = ScriptedProvider::new(5).with_phrases(&["Alpha"]);
    let mut generator = scripted_generator(seeded(), EchoStore::answering(1), provider);
    let first_session = generator.session_id().to_string();

    generator.generate_tag().expect("tag");
    assert!(generator.generate_tag().is_err());

    let second_session = generator.start_session().to_string();
    assert_ne!(first_session, second_session);
    generator.generate_tag().expect("tag after reset");
}

#[test]
fn catalog_plan_seeds_an_in_memory_store() {
    let plan = CatalogPlan {
        categories: 3,
        tags: 4,
        products: 6,
        reviews_per_product: 2,
    };
    let mut generator =
        CatalogGenerator::new(seeded(), InMemoryCatalogStore::new()).expect("generator");

    let report = generator
        .generate_catalog(&plan, &ids(&[900, 901]), &ids(&[700]))
        .expect("catalog");

    assert_eq!(report.category_ids.len(), 3);
    assert_eq!(report.tag_ids.len(), 4);
    assert_eq!(report.product_ids.len(), 6);
    assert_eq!(report.review_ids.len(), 12);
    assert_eq!(report.total(), 25);
    assert_eq!(report.session_id, generator.session_id());

    let store = generator.store();
    assert_eq!(store.len(EntityKind::Review), 12);
    for product_id in &report.product_ids {
        let product = store.get(EntityKind::Product, *product_id).expect("product");
        for category in product["categories"].as_array().expect("categories") {
            let id = EntityId(category["id"].as_u64().expect("id"));
            assert!(report.category_ids.contains(&id));
        }
        assert_eq!(product["brands"], json!([700]));
    }
}

#[test]
fn catalog_failure_keeps_entities_created_before_it() {
    let plan = CatalogPlan {
        categories: 2,
        tags: 2,
        products: 1,
        reviews_per_product: 1,
    };
    let store = FailAfter {
        inner: InMemoryCatalogStore::new(),
        remaining: 3,
    };
    let mut generator = CatalogGenerator::new(seeded(), store).expect("generator");

    let err = generator
        .generate_catalog(&plan, &[], &[])
        .expect_err("fails on fourth create");
    assert!(matches!(err, GenerateError::CreationFailed(message) if message == "Sorry, you are not allowed."));

    let store = generator.into_store();
    assert_eq!(store.inner.len(EntityKind::Category), 2);
    assert_eq!(store.inner.len(EntityKind::Tag), 1);
    assert_eq!(store.inner.len(EntityKind::Product), 0);
}

#[test]
fn same_seed_generates_the_same_catalog() {
    let plan = CatalogPlan {
        categories: 2,
        tags: 2,
        products: 3,
        reviews_per_product: 1,
    };
    let run = || {
        let mut generator =
            CatalogGenerator::new(seeded(), InMemoryCatalogStore::new()).expect("generator");
        generator
            .generate_catalog(&plan, &ids(&[1]), &[])
            .expect("catalog");
        let store = generator.into_store();
        store
            .ids(EntityKind::Product)
            .into_iter()
            .map(|id| store.get(EntityKind::Product, id).cloned().expect("product"))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut config = seeded();
    config.product.price.min = 200;
    assert!(matches!(
        CatalogGenerator::new(config, InMemoryCatalogStore::new()),
        Err(GenerateError::InvalidConfig(_))
    ));
}
