use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use shopseed_core::{
    CatalogStore, CategoryFields, EntityFields, EntityId, EntityKind, ProductFields, ReviewFields,
    StoreResponse, TagFields, validate_fields,
};

/// Catalog store that keeps every accepted entity in memory.
///
/// Ids are assigned sequentially across kinds. Names are unique per kind
/// (case-insensitive), SKUs are unique across products, and references to
/// products, categories and tags must point at entities this store created.
/// Attachment and brand ids are owned elsewhere and pass through unchecked.
#[derive(Debug)]
pub struct InMemoryCatalogStore {
    next_id: u64,
    records: BTreeMap<EntityKind, BTreeMap<EntityId, Value>>,
    names: BTreeMap<EntityKind, BTreeSet<String>>,
    skus: BTreeSet<String>,
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Store whose first assigned id is `first_id`.
    pub fn starting_at(first_id: u64) -> Self {
        Self {
            next_id: first_id,
            records: BTreeMap::new(),
            names: BTreeMap::new(),
            skus: BTreeSet::new(),
        }
    }

    pub fn get(&self, kind: EntityKind, id: EntityId) -> Option<&Value> {
        self.records.get(&kind)?.get(&id)
    }

    pub fn ids(&self, kind: EntityKind) -> Vec<EntityId> {
        self.records
            .get(&kind)
            .map(|records| records.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        self.records.get(&kind).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.records.values().all(BTreeMap::is_empty)
    }

    pub fn contains(&self, kind: EntityKind, id: EntityId) -> bool {
        self.get(kind, id).is_some()
    }

    fn create_review(&mut self, review: &ReviewFields) -> Result<EntityId, StoreResponse> {
        if !self.contains(EntityKind::Product, review.product_id) {
            return Err(StoreResponse::rejected(
                "product_invalid_id",
                format!("Invalid product ID {}.", review.product_id),
            ));
        }
        self.insert(EntityKind::Review, review)
    }

    fn create_category(&mut self, category: &CategoryFields) -> Result<EntityId, StoreResponse> {
        self.claim_name(EntityKind::Category, &category.name)?;
        self.insert(EntityKind::Category, category)
    }

    fn create_tag(&mut self, tag: &TagFields) -> Result<EntityId, StoreResponse> {
        self.claim_name(EntityKind::Tag, &tag.name)?;
        self.insert(EntityKind::Tag, tag)
    }

    fn create_product(&mut self, product: &ProductFields) -> Result<EntityId, StoreResponse> {
        self.check_refs(EntityKind::Category, &product.category_ids())?;
        self.check_refs(EntityKind::Tag, &product.tag_ids())?;
        if self.skus.contains(&product.sku) {
            return Err(StoreResponse::rejected(
                "product_invalid_sku",
                format!("Invalid or duplicated SKU {}.", product.sku),
            ));
        }
        self.claim_name(EntityKind::Product, &product.name)?;
        self.skus.insert(product.sku.clone());
        self.insert(EntityKind::Product, product)
    }

    fn check_refs(&self, kind: EntityKind, ids: &[EntityId]) -> Result<(), StoreResponse> {
        match ids.iter().find(|id| !self.contains(kind, **id)) {
            Some(missing) => Err(StoreResponse::rejected(
                format!("{kind}_invalid_id"),
                format!("Invalid {kind} ID {missing}."),
            )),
            None => Ok(()),
        }
    }

    fn claim_name(&mut self, kind: EntityKind, name: &str) -> Result<(), StoreResponse> {
        let key = name.trim().to_lowercase();
        let names = self.names.entry(kind).or_default();
        if !names.insert(key) {
            return Err(StoreResponse::rejected(
                "term_exists",
                format!("A {kind} with the name '{name}' already exists."),
            ));
        }
        Ok(())
    }

    fn insert<T: serde::Serialize>(
        &mut self,
        kind: EntityKind,
        fields: &T,
    ) -> Result<EntityId, StoreResponse> {
        let mut record = serde_json::to_value(fields)
            .map_err(|err| StoreResponse::rejected("invalid_body", err.to_string()))?;
        let id = EntityId(self.next_id);
        self.next_id += 1;
        if let Value::Object(map) = &mut record {
            map.insert("id".to_string(), Value::from(id.get()));
        }
        self.records.entry(kind).or_default().insert(id, record);
        Ok(id)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn create(&mut self, fields: &EntityFields) -> StoreResponse {
        if let Err(err) = validate_fields(fields) {
            return StoreResponse::rejected("invalid_param", err.to_string());
        }

        let result = match fields {
            EntityFields::Review(review) => self.create_review(review),
            EntityFields::Category(category) => self.create_category(category),
            EntityFields::Tag(tag) => self.create_tag(tag),
            EntityFields::Product(product) => self.create_product(product),
        };

        match result {
            Ok(id) => self
                .get(fields.kind(), id)
                .cloned()
                .map(StoreResponse::Created)
                .unwrap_or_else(|| StoreResponse::Created(serde_json::json!({ "id": id }))),
            Err(rejection) => rejection,
        }
    }
}
