use crate::array::compare_arrays;
use crate::equals_result::{normalize, primitive_equals, EqualsResult};
use crate::error::PropertyAccessError;
use crate::object::compare_object;
use serde_json::{Map, Value};

/// Structural comparison of two JSON values.
///
/// Arrays are compared without regard to element order, objects key by key (left keys first, then
/// keys only present on the right), and scalars of the same kind with `==`. A key present on only
/// one side is reported as a failed property read on the other side.
pub fn json_equals<'a>(left: &'a Value, right: &'a Value) -> EqualsResult<'a> {
    match (left, right) {
        (Value::Array(v1), Value::Array(v2)) => compare_arrays(v1, v2, json_equals),
        (Value::Object(v1), Value::Object(v2)) => compare_maps(v1, v2),
        (Value::Null, Value::Null)
        | (Value::Bool(_), Value::Bool(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::String(_), Value::String(_)) => primitive_equals(left, right),
        (_, _) => normalize(left, right, false),
    }
}

fn compare_maps<'a>(
    left: &'a Map<String, Value>,
    right: &'a Map<String, Value>,
) -> EqualsResult<'a> {
    let right_only = right.keys().filter(|key| !left.contains_key(key.as_str()));

    left.keys()
        .chain(right_only)
        .fold(compare_object(left, right), |object, key| {
            object.property(key, move |map| lookup(map, key), json_equals)
        })
        .finish()
}

fn lookup<'a>(
    map: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Value, PropertyAccessError> {
    map.get(key).ok_or_else(|| PropertyAccessError::missing(key))
}
