//! Attribute-map conversion between typed variants and persisted records.
//!
//! A persisted record is a flat JSON object: the entity's own attributes
//! plus the reserved [`CLASS_KEY`] discriminator naming the variant. The
//! helpers here are the single implementation of that conversion; every
//! variant's `to_attrs`/`from_attrs` goes through them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ModelError, ModelResult};

/// Ordered attribute mapping, as read from or written to the backing file.
pub type AttrMap = serde_json::Map<String, Value>;

/// Reserved discriminator key naming the concrete variant in a record.
pub const CLASS_KEY: &str = "__class__";

/// Convert a variant into its attribute record, tagged with `kind`.
///
/// Does not mutate the value. Timestamps render in their canonical text
/// form, so the result round-trips through [`from_attrs`].
pub fn to_attrs<T: Serialize>(model: &T, kind: &'static str) -> ModelResult<AttrMap> {
    match serde_json::to_value(model)? {
        Value::Object(mut map) => {
            map.insert(CLASS_KEY.to_string(), Value::String(kind.to_string()));
            Ok(map)
        }
        _ => Err(ModelError::NotARecord { kind }),
    }
}

/// Rebuild a variant from a persisted attribute record.
///
/// The discriminator key is dropped; every other attribute is applied.
/// Malformed ids or timestamps fail the whole conversion.
pub fn from_attrs<T: DeserializeOwned>(attrs: &AttrMap) -> ModelResult<T> {
    let mut map = attrs.clone();
    map.remove(CLASS_KEY);
    Ok(serde_json::from_value(Value::Object(map))?)
}
