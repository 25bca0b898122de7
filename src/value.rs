//! Dynamic value representation for decoded STC documents.
//!
//! [`Value`] is what [`decode`](crate::decode) returns: maps, lists, integers,
//! floats, booleans and strings. There is no null; a key that is never assigned is
//! simply absent.
//!
//! ## Usage Patterns
//!
//! ### Inspecting a decoded document
//!
//! ```rust
//! use serde_stc::{decode_with_options, DecodeOptions, Value};
//!
//! let doc = "server.port: 8080\nserver.tags.$0: ```\nedge\n```";
//! let value = decode_with_options(doc, &DecodeOptions::fallback()).unwrap();
//!
//! let server = value.get("server").unwrap();
//! assert_eq!(server.get("port").and_then(Value::as_i64), Some(8080));
//! assert_eq!(server.get("tags").and_then(|t| t.get_index(0)).and_then(Value::as_str), Some("edge"));
//! ```
//!
//! ### Converting into Rust types
//!
//! `Value` is itself a serde `Deserializer`, so any `DeserializeOwned` type can be
//! built from it with [`from_value`](crate::from_value).
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_stc::{decode_with_options, from_value, DecodeOptions};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server { port: u16 }
//!
//! let value = decode_with_options("port: 8080", &DecodeOptions::fallback()).unwrap();
//! let server: Server = from_value(value).unwrap();
//! assert_eq!(server, Server { port: 8080 });
//! ```

use crate::{Error, StcMap};
use serde::de::value::{MapAccessDeserializer, MapDeserializer, SeqDeserializer, StringDeserializer};
use serde::de::{self, IntoDeserializer, Visitor};
use serde::{forward_to_deserialize_any, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A fully decoded STC value.
///
/// # Examples
///
/// ```rust
/// use serde_stc::Value;
///
/// let num = Value::Integer(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_integer());
/// assert!(text.is_string());
/// assert_eq!(Value::default(), Value::Map(Default::default()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Map(StcMap),
    List(Vec<Value>),
    Integer(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl Default for Value {
    /// The empty document.
    fn default() -> Self {
        Value::Map(StcMap::new())
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` for integers and floats.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as `f64`, widening integers.
    ///
    /// ```rust
    /// use serde_stc::Value;
    ///
    /// assert_eq!(Value::Integer(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
    /// assert_eq!(Value::Bool(true).as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&StcMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` if this value is a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Looks up position `index` if this value is a list.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_list().and_then(|list| list.get(index))
    }

    /// A short name for the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Map(_) => "map",
            Value::List(_) => "list",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::String(_) => "string",
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                use serde::ser::SerializeMap;
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    state.serialize_entry(k, v)?;
                }
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map, list, number, boolean or string")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Integer(i)),
                    Err(_) => Ok(Value::Float(value as f64)),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::List(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = StcMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Map(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// A decoded `Value` drives typed deserialization directly.
impl<'de> Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> crate::Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Integer(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::List(list) => visitor.visit_seq(SeqDeserializer::new(list.into_iter())),
            Value::Map(map) => visitor.visit_map(MapDeserializer::new(map.into_iter())),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> crate::Result<V::Value>
    where
        V: Visitor<'de>,
    {
        // Absent keys are the only way to express "none".
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> crate::Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> crate::Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(variant) => {
                let variant: StringDeserializer<Error> = variant.into_deserializer();
                visitor.visit_enum(variant)
            }
            Value::Map(map) if map.len() == 1 => visitor.visit_enum(MapAccessDeserializer::new(
                MapDeserializer::new(map.into_iter()),
            )),
            other => Err(Error::custom(format!(
                "expected enum `{}` as a string or a single-entry map, found {}",
                name,
                other.type_name()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(Error::custom(format!(
                "expected integer, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value.as_f64().ok_or_else(|| {
            Error::custom(format!("expected number, found {}", value.type_name()))
        })
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(Error::custom(format!(
                "expected boolean, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(Error::custom(format!(
                "expected string, found {}",
                value.type_name()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<StcMap> for Value {
    fn from(value: StcMap) -> Self {
        Value::Map(value)
    }
}
