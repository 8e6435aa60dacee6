//! Three-state schema fields.
//!
//! API resources distinguish a key that is missing from a key that is
//! present with `null`, and both from a key holding a value. [`Field`] keeps
//! all three apart through a decode/encode round trip.
//!
//! Schema structs pair it with `#[serde(default)]` on the container and
//! `#[serde(skip_serializing_if = "Field::is_absent")]` on each field.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional, nullable schema field.
///
/// # Example
///
/// ```
/// use ytdata_core::Field;
///
/// let title: Field<String> = "Hello".into();
/// assert_eq!(title.value().map(String::as_str), Some("Hello"));
///
/// let missing: Field<String> = Field::Absent;
/// assert!(missing.is_absent());
/// assert!(!missing.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The key was not present.
    Absent,
    /// The key was present with an explicit `null`.
    Null,
    /// The key was present with a value.
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    /// Returns the value, treating absent and null alike.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value, if present.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Field::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the field, treating absent and null alike.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Present(v) => Field::Present(v),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Present(v) => Field::Present(f(v)),
        }
    }

    /// Returns the value or inserts `T::default()` first.
    ///
    /// Handy when filling in nested parts of a payload.
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        if !self.is_present() {
            *self = Field::Present(T::default());
        }
        match self {
            Field::Present(v) => v,
            _ => unreachable!("field was just populated"),
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Field::Present(value.to_string())
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Absent fields are skipped by the container; reaching here means
            // the field is serialized on its own.
            Field::Absent | Field::Null => serializer.serialize_none(),
            Field::Present(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Field::Present(v),
            None => Field::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(skip_serializing_if = "Field::is_absent")]
        title: Field<String>,
        #[serde(skip_serializing_if = "Field::is_absent")]
        count: Field<u32>,
    }

    #[test]
    fn missing_key_is_absent() {
        let sample: Sample = serde_json::from_value(json!({ "count": 3 })).unwrap();
        assert_eq!(sample.title, Field::Absent);
        assert_eq!(sample.count, Field::Present(3));
    }

    #[test]
    fn explicit_null_is_null() {
        let sample: Sample = serde_json::from_value(json!({ "title": null })).unwrap();
        assert_eq!(sample.title, Field::Null);
        assert_ne!(sample.title, Field::Absent);
    }

    #[test]
    fn three_states_survive_encoding() {
        let input = json!({ "title": null, "count": 7 });
        let sample: Sample = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&sample).unwrap(), input);

        let empty = Sample::default();
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));
    }

    #[test]
    fn wrong_type_fails() {
        let result = serde_json::from_value::<Sample>(json!({ "count": "three" }));
        assert!(result.is_err());
    }

    #[test]
    fn get_or_insert_default_populates() {
        let mut field: Field<Vec<String>> = Field::Null;
        field.get_or_insert_default().push("a".to_string());
        assert_eq!(field, Field::Present(vec!["a".to_string()]));
    }
}
