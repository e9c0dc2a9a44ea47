//! JSON envelope extraction for admin API responses.
//!
//! The admin API answers in three shapes, sometimes mixed within one
//! resource family:
//!
//! - a collection wrapper: `{"services": [{"service": {...}}, ...]}`
//! - a single wrapped entity: `{"service": {...}}`
//! - a bare mapping with no entity key (settings, proxy configs)
//!
//! [`extract`] normalizes all of them into [`Extracted`]. The rule:
//!
//! 1. If a `collection` key is given, index into the body by that key first.
//! 2. A sequence maps each element by extracting the `entity` key from it;
//!    elements have **no** whole-mapping fallback.
//! 3. A mapping extracts the `entity` key, falling back to the whole mapping
//!    when the key is absent.
//! 4. `null` (and blank bodies decoded to `null`) yield nothing.
//! 5. Any other shape is an unrecoverable error.

use serde_json::Value;

use crate::rest::entity::Fields;
use crate::rest::errors::ResourceError;

/// The result of unwrapping a response envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// The body was `null` or blank.
    Empty,
    /// A single entity mapping.
    One(Fields),
    /// A collection of entity mappings, in server response order.
    Many(Vec<Fields>),
}

/// Unwraps a decoded response body into entity mappings.
///
/// # Arguments
///
/// * `from` - The decoded response body
/// * `collection` - Optional collection key to index into first
/// * `entity` - The entity key to extract
///
/// # Errors
///
/// Returns [`ResourceError::UnexpectedShape`] when the body (or a collection
/// element) does not match any shape the rule understands.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use threescale_api::rest::{extract, Extracted};
///
/// let body = json!({"services": [{"service": {"id": 1}}, {"service": {"id": 2}}]});
/// let Extracted::Many(services) = extract(body, Some("services"), "service").unwrap() else {
///     panic!("expected a collection");
/// };
/// assert_eq!(services.len(), 2);
/// ```
pub fn extract(
    from: Value,
    collection: Option<&str>,
    entity: &str,
) -> Result<Extracted, ResourceError> {
    let from = match collection {
        Some(key) => match from {
            Value::Null => Value::Null,
            Value::Object(mut map) => {
                map.remove(key)
                    .ok_or_else(|| ResourceError::UnexpectedShape {
                        detail: format!("response has no '{key}' collection"),
                    })?
            }
            other => {
                return Err(ResourceError::UnexpectedShape {
                    detail: format!(
                        "expected an object wrapping '{key}', got {}",
                        shape_name(&other)
                    ),
                })
            }
        },
        None => from,
    };

    match from {
        Value::Null => Ok(Extracted::Empty),
        Value::Array(items) => {
            let mut entities = Vec::with_capacity(items.len());
            for item in items {
                entities.push(collection_member(item, entity)?);
            }
            Ok(Extracted::Many(entities))
        }
        Value::Object(mut map) => match map.remove(entity) {
            Some(Value::Object(fields)) => Ok(Extracted::One(fields)),
            Some(other) => Err(ResourceError::UnexpectedShape {
                detail: format!("'{entity}' value is {}, not an object", shape_name(&other)),
            }),
            // The entity key is absent: the body itself is the entity.
            None => Ok(Extracted::One(map)),
        },
        other => Err(ResourceError::UnexpectedShape {
            detail: format!("cannot extract '{entity}' from {}", shape_name(&other)),
        }),
    }
}

/// Extracts the entity mapping from one collection element.
///
/// Unlike the single-mapping case, collection elements must carry the entity
/// key; a missing key is a malformed collection, not a fallback case.
fn collection_member(item: Value, entity: &str) -> Result<Fields, ResourceError> {
    match item {
        Value::Object(mut map) => match map.remove(entity) {
            Some(Value::Object(fields)) => Ok(fields),
            Some(other) => Err(ResourceError::UnexpectedShape {
                detail: format!(
                    "collection element '{entity}' value is {}, not an object",
                    shape_name(&other)
                ),
            }),
            None => Err(ResourceError::UnexpectedShape {
                detail: format!("collection element has no '{entity}' key"),
            }),
        },
        other => Err(ResourceError::UnexpectedShape {
            detail: format!("collection element is {}, not an object", shape_name(&other)),
        }),
    }
}

const fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_extracts_wrapped_entity_from_mapping() {
        let body = json!({"service": {"id": 1, "name": "api"}});
        let result = extract(body, None, "service").unwrap();
        assert_eq!(result, Extracted::One(fields(json!({"id": 1, "name": "api"}))));
    }

    #[test]
    fn test_falls_back_to_whole_mapping_when_entity_key_absent() {
        let body = json!({"signups_enabled": true, "strong_passwords_enabled": false});
        let result = extract(body.clone(), None, "settings").unwrap();
        assert_eq!(result, Extracted::One(fields(body)));
    }

    #[test]
    fn test_extracts_collection_elements_by_entity_key() {
        let body = json!({
            "services": [
                {"service": {"id": 1}},
                {"service": {"id": 2}},
            ]
        });
        let result = extract(body, Some("services"), "service").unwrap();
        assert_eq!(
            result,
            Extracted::Many(vec![fields(json!({"id": 1})), fields(json!({"id": 2}))])
        );
    }

    #[test]
    fn test_empty_collection_yields_no_entities() {
        let body = json!({"services": []});
        let result = extract(body, Some("services"), "service").unwrap();
        assert_eq!(result, Extracted::Many(Vec::new()));
    }

    #[test]
    fn test_null_body_is_empty() {
        assert_eq!(extract(Value::Null, None, "service").unwrap(), Extracted::Empty);
        assert_eq!(
            extract(Value::Null, Some("services"), "service").unwrap(),
            Extracted::Empty
        );
    }

    #[test]
    fn test_missing_collection_key_is_an_error() {
        let body = json!({"something_else": []});
        let result = extract(body, Some("services"), "service");
        assert!(matches!(result, Err(ResourceError::UnexpectedShape { .. })));
    }

    #[test]
    fn test_collection_element_without_entity_key_is_an_error() {
        // The whole-mapping fallback applies to single mappings only.
        let body = json!({"services": [{"id": 1}]});
        let result = extract(body, Some("services"), "service");
        assert!(matches!(result, Err(ResourceError::UnexpectedShape { .. })));
    }

    #[test]
    fn test_scalar_body_is_an_error() {
        let result = extract(json!("oops"), None, "service");
        assert!(matches!(result, Err(ResourceError::UnexpectedShape { .. })));

        let result = extract(json!(42), Some("services"), "service");
        assert!(matches!(result, Err(ResourceError::UnexpectedShape { .. })));
    }

    #[test]
    fn test_entity_key_with_scalar_value_is_an_error() {
        let body = json!({"service": "not-an-object"});
        let result = extract(body, None, "service");
        assert!(matches!(result, Err(ResourceError::UnexpectedShape { .. })));
    }

    #[test]
    fn test_bare_array_without_collection_key() {
        let body = json!([{"key": {"value": "abc"}}]);
        let result = extract(body, None, "key").unwrap();
        assert_eq!(result, Extracted::Many(vec![fields(json!({"value": "abc"}))]));
    }
}
