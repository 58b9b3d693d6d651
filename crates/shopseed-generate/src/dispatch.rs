use serde_json::Value;
use tracing::{debug, info, warn};

use shopseed_core::{CatalogStore, EntityFields, EntityId, StoreResponse};

use crate::errors::GenerateError;

/// Submit one field-set and return the id the store assigned.
///
/// A rejection surfaces as `CreationFailed` with the store's message
/// verbatim, as does an accepted response without a numeric `id`. Nothing is
/// retried.
pub fn create<S>(store: &mut S, fields: &EntityFields) -> Result<EntityId, GenerateError>
where
    S: CatalogStore + ?Sized,
{
    let kind = fields.kind();
    debug!(kind = %kind, name = fields.name().unwrap_or(""), "submitting create request");

    match store.create(fields) {
        StoreResponse::Rejected(rejection) => {
            warn!(
                kind = %kind,
                code = %rejection.code,
                message = %rejection.message,
                "store rejected entity"
            );
            Err(GenerateError::CreationFailed(rejection.message))
        }
        StoreResponse::Created(body) => match extract_id(&body) {
            Some(id) => {
                info!(kind = %kind, id = %id, "entity created");
                Ok(id)
            }
            None => {
                warn!(kind = %kind, body = %body, "create response carried no id");
                Err(GenerateError::CreationFailed(format!(
                    "{kind} create response did not include an id"
                )))
            }
        },
    }
}

fn extract_id(body: &Value) -> Option<EntityId> {
    body.get("id").and_then(Value::as_u64).map(EntityId)
}
