//! JSON body encoding and decoding with configurable key casing.
//!
//! # Design
//! serde fixes field names at compile time, so key strategies are applied on
//! the `serde_json::Value` tree between the typed value and the wire bytes.
//! Every object key is rewritten recursively, including keys of objects
//! nested in arrays. `UseDefaultKeys` skips the intermediate tree entirely.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::HttpError;

/// Caller-supplied key mapping.
pub type KeyMapper = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// How field names of an encoded value map to keys on the wire.
#[derive(Clone, Default)]
pub enum KeyEncodingStrategy {
    /// Keys are written as serde produces them.
    #[default]
    UseDefaultKeys,
    /// `camelCase` keys are written as `snake_case`.
    ConvertToSnakeCase,
    /// `snake_case` keys are written as `camelCase`.
    ConvertToCamelCase,
    Custom(KeyMapper),
}

/// How keys on the wire map to field names of the decoded type.
#[derive(Clone, Default)]
pub enum KeyDecodingStrategy {
    /// Keys are read as they appear on the wire.
    #[default]
    UseDefaultKeys,
    /// `snake_case` wire keys are read as `camelCase`.
    ConvertFromSnakeCase,
    /// `camelCase` wire keys are read as `snake_case`.
    ConvertFromCamelCase,
    Custom(KeyMapper),
}

impl KeyEncodingStrategy {
    pub fn custom(mapper: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        KeyEncodingStrategy::Custom(Arc::new(mapper))
    }

    fn mapper(&self) -> Option<&(dyn Fn(&str) -> String + Send + Sync)> {
        match self {
            KeyEncodingStrategy::UseDefaultKeys => None,
            KeyEncodingStrategy::ConvertToSnakeCase => Some(&to_snake_case),
            KeyEncodingStrategy::ConvertToCamelCase => Some(&to_camel_case),
            KeyEncodingStrategy::Custom(mapper) => Some(mapper.as_ref()),
        }
    }
}

impl KeyDecodingStrategy {
    pub fn custom(mapper: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        KeyDecodingStrategy::Custom(Arc::new(mapper))
    }

    fn mapper(&self) -> Option<&(dyn Fn(&str) -> String + Send + Sync)> {
        match self {
            KeyDecodingStrategy::UseDefaultKeys => None,
            KeyDecodingStrategy::ConvertFromSnakeCase => Some(&to_camel_case),
            KeyDecodingStrategy::ConvertFromCamelCase => Some(&to_snake_case),
            KeyDecodingStrategy::Custom(mapper) => Some(mapper.as_ref()),
        }
    }
}

impl fmt::Debug for KeyEncodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEncodingStrategy::UseDefaultKeys => f.write_str("UseDefaultKeys"),
            KeyEncodingStrategy::ConvertToSnakeCase => f.write_str("ConvertToSnakeCase"),
            KeyEncodingStrategy::ConvertToCamelCase => f.write_str("ConvertToCamelCase"),
            KeyEncodingStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl fmt::Debug for KeyDecodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyDecodingStrategy::UseDefaultKeys => f.write_str("UseDefaultKeys"),
            KeyDecodingStrategy::ConvertFromSnakeCase => f.write_str("ConvertFromSnakeCase"),
            KeyDecodingStrategy::ConvertFromCamelCase => f.write_str("ConvertFromCamelCase"),
            KeyDecodingStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Serialize `value` to JSON bytes, rewriting keys per `strategy`.
pub fn encode<T>(value: &T, strategy: &KeyEncodingStrategy) -> Result<Vec<u8>, HttpError>
where
    T: Serialize + ?Sized,
{
    let Some(mapper) = strategy.mapper() else {
        return serde_json::to_vec(value).map_err(HttpError::Encode);
    };
    let mut tree = serde_json::to_value(value).map_err(HttpError::Encode)?;
    rewrite_keys(&mut tree, mapper);
    serde_json::to_vec(&tree).map_err(HttpError::Encode)
}

/// Deserialize JSON `bytes` into `T`, rewriting keys per `strategy` first.
pub fn decode<T>(bytes: &[u8], strategy: &KeyDecodingStrategy) -> Result<T, HttpError>
where
    T: DeserializeOwned,
{
    let Some(mapper) = strategy.mapper() else {
        return serde_json::from_slice(bytes).map_err(HttpError::Decode);
    };
    let mut tree: Value = serde_json::from_slice(bytes).map_err(HttpError::Decode)?;
    rewrite_keys(&mut tree, mapper);
    serde_json::from_value(tree).map_err(HttpError::Decode)
}

fn rewrite_keys(value: &mut Value, mapper: &(dyn Fn(&str) -> String + Send + Sync)) {
    match value {
        Value::Object(map) => {
            let entries = std::mem::take(map);
            *map = entries
                .into_iter()
                .map(|(key, mut nested)| {
                    rewrite_keys(&mut nested, mapper);
                    (mapper(&key), nested)
                })
                .collect::<Map<String, Value>>();
        }
        Value::Array(items) => {
            for item in items {
                rewrite_keys(item, mapper);
            }
        }
        _ => {}
    }
}

/// `camelCase` to `snake_case`. Runs of capitals are one word, so
/// `myURLProperty` becomes `my_url_property`.
pub fn to_snake_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// `snake_case` to `camelCase`. Leading and trailing underscores are kept;
/// keys without an inner underscore are returned unchanged.
pub fn to_camel_case(key: &str) -> String {
    let core = key.trim_matches('_');
    if !core.contains('_') {
        return key.to_string();
    }

    let leading = key.len() - key.trim_start_matches('_').len();
    let trailing = key.len() - key.trim_end_matches('_').len();

    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..leading]);
    for (i, word) in core.split('_').filter(|w| !w.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out.push_str(&key[key.len() - trailing..]);
    out
}
