//! JSON output
//!
//! An object keyed by algorithm name, in result-set order. Each value holds
//! the parallel `sizes`, `times`, `mems` and `errors` arrays. Absent values
//! are `null`; floats JSON cannot represent (NaN, infinities) are written as
//! strings and parsed back on load.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{AppError, AppResult},
    models::{AlgorithmResult, ResultSet},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum JsonNumber {
    Number(f64),
    Text(String),
}

impl JsonNumber {
    fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            JsonNumber::Number(value)
        } else {
            JsonNumber::Text(value.to_string())
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            JsonNumber::Number(value) => Some(*value),
            JsonNumber::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonAlgorithmResult {
    sizes: Vec<usize>,
    times: Vec<Option<JsonNumber>>,
    mems: Vec<Option<JsonNumber>>,
    errors: Vec<Option<Vec<String>>>,
}

impl From<&AlgorithmResult> for JsonAlgorithmResult {
    fn from(result: &AlgorithmResult) -> Self {
        let encode = |values: &[Option<f64>]| -> Vec<Option<JsonNumber>> {
            values.iter().map(|v| v.map(JsonNumber::from_f64)).collect()
        };

        Self {
            sizes: result.sizes().to_vec(),
            times: encode(result.times()),
            mems: encode(result.mems()),
            errors: result.errors().to_vec(),
        }
    }
}

impl JsonAlgorithmResult {
    fn into_result(self, algorithm: &str) -> AppResult<AlgorithmResult> {
        let len = self.sizes.len();
        if self.times.len() != len || self.mems.len() != len || self.errors.len() != len {
            return Err(AppError::InvalidInput(format!(
                "misaligned result arrays for '{}': sizes={}, times={}, mems={}, errors={}",
                algorithm,
                len,
                self.times.len(),
                self.mems.len(),
                self.errors.len()
            )));
        }

        let mut result = AlgorithmResult::with_capacity(len);
        let rows = self
            .sizes
            .into_iter()
            .zip(self.times)
            .zip(self.mems)
            .zip(self.errors);
        for (((size, time), mem), errors) in rows {
            result.push(
                size,
                time.and_then(|t| t.to_f64()),
                mem.and_then(|m| m.to_f64()),
                errors.unwrap_or_default(),
            );
        }
        Ok(result)
    }
}

/// Serializes a borrowed result set as an ordered JSON object
struct JsonResultSet<'a>(&'a ResultSet);

impl Serialize for JsonResultSet<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (algorithm, result) in self.0.iter() {
            map.serialize_entry(algorithm, &JsonAlgorithmResult::from(result))?;
        }
        map.end()
    }
}

/// Entries in document order, as read back
struct OrderedEntries(Vec<(String, JsonAlgorithmResult)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by algorithm name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, result)) = access.next_entry::<String, JsonAlgorithmResult>()? {
                    entries.push((name, result));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Render a result set as pretty-printed JSON
pub fn render_json(results: &ResultSet) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&JsonResultSet(results))?)
}

/// Write a result set to `path` as JSON
pub fn save_json(results: &ResultSet, path: impl AsRef<Path>) -> AppResult<()> {
    let mut text = render_json(results)?;
    text.push('\n');
    super::write_file(path.as_ref(), &text)
}

/// Parse JSON text produced by [`render_json`]
pub fn parse_json(text: &str) -> AppResult<ResultSet> {
    let OrderedEntries(entries) = serde_json::from_str(text)?;

    let mut results = ResultSet::new();
    for (algorithm, raw) in entries {
        let result = raw.into_result(&algorithm)?;
        results.insert(algorithm, result);
    }
    Ok(results)
}

/// Load a result set previously written by [`save_json`]
pub fn load_json(path: impl AsRef<Path>) -> AppResult<ResultSet> {
    parse_json(&fs::read_to_string(path.as_ref())?)
}
