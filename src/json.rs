use crate::error::HeroError;
use crate::model::Hero;
use serde_json::{Map, Number, Value};

/// Rewrite every object key in `value` from snake_case to camelCase.
///
/// Arrays keep their length and order, objects keep their key order, and
/// every other value is returned as-is. The input is left untouched.
///
/// ```
/// use dota_heroes::json::normalize;
/// use serde_json::json;
///
/// let raw = json!({ "primary_attr": "str", "roles": [{ "role_name": "Carry" }] });
/// assert_eq!(normalize(&raw), json!({ "primaryAttr": "str", "roles": [{ "roleName": "Carry" }] }));
/// ```
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, val) in obj {
                out.insert(to_camel_case(key), normalize(val));
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

/// Drop each `_` that is directly followed by `a-z` and uppercase that letter.
///
/// Anything else, including `_` before digits, capitals or another `_`, is
/// copied through, so camelCase keys come back unchanged.
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Parse a saved `heroStats` payload into heroes, in payload order.
pub fn read_hero_stats(data: &str) -> Result<Vec<Hero>, HeroError> {
    let root: Value = serde_json::from_str(data)?;
    heroes_from_value(&root)
}

pub(crate) fn heroes_from_value(root: &Value) -> Result<Vec<Hero>, HeroError> {
    let items = match root.as_array() {
        Some(items) => items,
        None => {
            log::warn!("heroStats payload is a {}, expected an array", kind_of(root));
            return Err(HeroError::UnexpectedShape {
                expected: "array",
                found: kind_of(root),
            });
        }
    };
    Ok(items.iter().map(Hero::from_json).collect())
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integral values go out as JSON integers so `120.0` prints as `120`.
pub(crate) fn number(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < (i64::MAX as f64) {
        return Value::Number((v as i64).into());
    }
    Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
}
