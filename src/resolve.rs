//! Fetch and insert values in a JSON tree addressed by a sub-document path.
//!
//! Both operations consume the path head first and recurse on the rest.
//! Insertion rebuilds the tree through its return value: every level splices
//! the recursive result back into its own key or index, so the caller ends up
//! with a fully rebuilt root.

use serde_json::{Map, Value};

use crate::{errors::PathError, lexer::tokenize, token::PathSegment};

/// Fetches the value addressed by `path`, or `Ok(None)` when any part of the
/// path is missing from `root`.
///
/// A missing key, an out-of-range index and a `null` encountered mid-path all
/// resolve to `Ok(None)`. Only a path segment whose kind disagrees with the
/// container it addresses is an error.
pub fn get<'a>(root: &'a Value, path: &[PathSegment]) -> Result<Option<&'a Value>, PathError> {
    get_in(Some(root), path, 0)
}

/// Tokenizes `path` and fetches the value it addresses.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Result<Option<&'a Value>, PathError> {
    get(root, &tokenize(path))
}

/// Places `new_value` at the location addressed by `path`, materializing any
/// missing intermediate containers, and returns the rebuilt root.
///
/// Inserting at an index beyond the current array length grows the array to
/// that index, filling the gap with nulls.
pub fn insert(root: Value, path: &[PathSegment], new_value: Value) -> Result<Value, PathError> {
    insert_in(Some(root), path, new_value, 0)
}

/// Tokenizes `path` and inserts `new_value` at the location it addresses.
pub fn insert_path(root: Value, path: &str, new_value: Value) -> Result<Value, PathError> {
    insert(root, &tokenize(path), new_value)
}

fn get_in<'a>(
    value: Option<&'a Value>,
    path: &[PathSegment],
    depth: usize,
) -> Result<Option<&'a Value>, PathError> {
    let Some((segment, rest)) = path.split_first() else {
        return Ok(value);
    };

    // A null mid-path is as good as absent.
    let Some(value) = value.filter(|value| !value.is_null()) else {
        return Ok(None);
    };

    match segment {
        PathSegment::Property { name } => match value {
            Value::Object(map) => get_in(map.get(name.as_ref()), rest, depth + 1),
            other => Err(PathError::type_mismatch(
                format!("expected object, found {}", kind_of(other)),
                depth,
            )),
        },
        PathSegment::Index { index } => match value {
            Value::Array(items) => get_in(items.get(*index), rest, depth + 1),
            other => Err(PathError::type_mismatch(
                format!("expected array, found {}", kind_of(other)),
                depth,
            )),
        },
    }
}

fn insert_in(
    value: Option<Value>,
    path: &[PathSegment],
    new_value: Value,
    depth: usize,
) -> Result<Value, PathError> {
    let Some((segment, rest)) = path.split_first() else {
        return Ok(new_value);
    };

    // Nulls are overwritten by container materialization, same as absent.
    let value = value.filter(|value| !value.is_null());

    match segment {
        PathSegment::Property { name } => {
            let mut map = match value {
                None => Map::new(),
                Some(Value::Object(map)) => map,
                Some(other) => {
                    return Err(PathError::type_mismatch(
                        format!("expected object, found {}", kind_of(&other)),
                        depth,
                    ));
                }
            };

            let child = map.remove(name.as_ref());
            let child = insert_in(child, rest, new_value, depth + 1)?;
            map.insert(name.to_string(), child);
            Ok(Value::Object(map))
        }
        PathSegment::Index { index } => {
            let mut items = match value {
                None => Vec::new(),
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(PathError::type_mismatch(
                        format!("expected array, found {}", kind_of(&other)),
                        depth,
                    ));
                }
            };

            if items.len() <= *index {
                items.resize(*index + 1, Value::Null);
            }

            let child = std::mem::take(&mut items[*index]);
            items[*index] = insert_in(Some(child), rest, new_value, depth + 1)?;
            Ok(Value::Array(items))
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
