//! Dynamic values and records.
//!
//! Validation input arrives as loosely typed form data: a field may hold
//! text, a number, a boolean, or be missing entirely. [`Value`] is the
//! tagged union covering exactly those shapes, and [`Record`] maps field
//! names to values. Predicates are total over [`Value`] — a wrong-typed or
//! absent field makes a predicate return `false`, never panic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// VALUE
// ============================================================================

/// A single field value: text, number, boolean, or absent.
///
/// `Absent` stands in for both "field not supplied" and JSON `null`, so a
/// [`Record`] lookup can always hand back a `&Value` and predicates never
/// need to distinguish a missing key from an explicit null.
///
/// # Examples
///
/// ```
/// use fieldcheck::value::Value;
///
/// assert!(Value::from("hello").is_truthy());
/// assert!(!Value::from("").is_truthy());
/// assert!(!Value::Absent.is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// A numeric value. All numbers are carried as `f64`.
    Number(f64),
    /// Textual content.
    Text(String),
    /// The field is missing or was explicitly null.
    #[default]
    Absent,
}

impl Value {
    /// Returns `true` if the value is [`Value::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Truthiness as the source form-validation rules understand it:
    /// absent, `false`, `0`, NaN, and the empty string are all falsy.
    ///
    /// Note that whitespace-only text is truthy here; only the `required`
    /// predicate additionally trims.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::Absent => false,
        }
    }

    /// Returns the text content, if this value is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content, if this value is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content, if this value is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Converts a JSON scalar into a [`Value`].
    ///
    /// `null` maps to `Absent`. Arrays and objects fall outside the value
    /// union and are carried as `Absent` as well — nested structure is not
    /// something the rule engine validates.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Absent, Value::Number),
            serde_json::Value::String(s) => Value::Text(s.clone()),
            _ => Value::Absent,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Absent, Into::into)
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// The value handed out for fields a record does not contain.
static ABSENT: Value = Value::Absent;

/// A record under validation: a mapping from field name to [`Value`].
///
/// Records are supplied fresh per validation call. The engine never
/// mutates or retains them.
///
/// # Examples
///
/// ```
/// use fieldcheck::value::{Record, Value};
///
/// let record = Record::new()
///     .set("email", "j@x.com")
///     .set("age", 42i64);
///
/// assert_eq!(record.get("email"), &Value::from("j@x.com"));
/// assert!(record.get("phone").is_absent());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, builder-style.
    #[must_use = "builder methods must be chained or built"]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Inserts a field in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Looks up a field, returning [`Value::Absent`] for missing names.
    #[must_use]
    pub fn get(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&ABSENT)
    }

    /// Returns `true` if the record contains the field name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over field names and values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds a record from a JSON object.
    ///
    /// Each scalar entry becomes a field via [`Value::from_json`]. Passing
    /// anything other than an object yields an empty record.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Self {
        let mut record = Record::new();
        if let serde_json::Value::Object(map) = json {
            for (name, value) in map {
                record.insert(name.clone(), Value::from_json(value));
            }
        }
        record
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness() {
        assert!(Value::from("x").is_truthy());
        assert!(Value::from(1i64).is_truthy());
        assert!(Value::from(true).is_truthy());
        assert!(Value::from(" ").is_truthy()); // whitespace is not empty

        assert!(!Value::from("").is_truthy());
        assert!(!Value::from(0i64).is_truthy());
        assert!(!Value::from(f64::NAN).is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::Absent.is_truthy());
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Value::from(Some("x")), Value::from("x"));
        assert_eq!(Value::from(None::<&str>), Value::Absent);
    }

    #[test]
    fn record_get_missing_is_absent() {
        let record = Record::new();
        assert!(record.get("anything").is_absent());
    }

    #[test]
    fn record_from_json_object() {
        let record = Record::from_json(&json!({
            "name": "Alice",
            "age": 30,
            "active": true,
            "bio": null,
            "tags": ["a", "b"],
        }));

        assert_eq!(record.get("name").as_text(), Some("Alice"));
        assert_eq!(record.get("age").as_number(), Some(30.0));
        assert_eq!(record.get("active").as_bool(), Some(true));
        assert!(record.get("bio").is_absent());
        // nested structure is outside the value union
        assert!(record.get("tags").is_absent());
    }

    #[test]
    fn record_from_json_non_object() {
        assert!(Record::from_json(&json!("scalar")).is_empty());
        assert!(Record::from_json(&json!(null)).is_empty());
    }

    #[test]
    fn value_serde_round_trip() {
        let record = Record::new().set("a", "text").set("b", 2i64).set("c", true);
        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: Record = serde_json::from_str(&encoded).unwrap();
        assert_eq!(record, decoded);
    }
}
