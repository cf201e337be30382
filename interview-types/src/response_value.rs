use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single value stored in [`crate::ResponseData`].
///
/// The engine carries these from the Moderator (or Script) into the response
/// store and out through the completion callback without ever interpreting
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// A string value.
    String(String),

    /// An integer value.
    Int(i64),

    /// A floating-point value.
    Float(f64),

    /// A boolean value.
    Bool(bool),

    /// An ordered list of values.
    List(Vec<ResponseValue>),

    /// A nested mapping of values.
    Map(BTreeMap<String, ResponseValue>),
}

impl ResponseValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a list.
    pub fn as_list(&self) -> Option<&[ResponseValue]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Try to get this value as a nested map.
    pub fn as_map(&self) -> Option<&BTreeMap<String, ResponseValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Bool(_) => "Bool",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
        }
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for ResponseValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for ResponseValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for ResponseValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for ResponseValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<ResponseValue>> for ResponseValue {
    fn from(list: Vec<ResponseValue>) -> Self {
        Self::List(list)
    }
}

impl From<BTreeMap<String, ResponseValue>> for ResponseValue {
    fn from(map: BTreeMap<String, ResponseValue>) -> Self {
        Self::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(ResponseValue::from("hi").as_str(), Some("hi"));
        assert_eq!(ResponseValue::from(7).as_int(), Some(7));
        assert_eq!(ResponseValue::from(true).as_bool(), Some(true));
        assert_eq!(ResponseValue::from(7).as_str(), None);
    }

    #[test]
    fn type_name() {
        assert_eq!(ResponseValue::from(1.5).type_name(), "Float");
        assert_eq!(ResponseValue::List(vec![]).type_name(), "List");
    }

    #[test]
    fn serializes_untagged() {
        let value = ResponseValue::from("Alice");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"Alice\"");

        let value: ResponseValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, ResponseValue::Int(42));
    }

    #[test]
    fn nested_round_trip() {
        let mut map = BTreeMap::new();
        map.insert("inner".to_string(), ResponseValue::from(3));
        let value = ResponseValue::List(vec![ResponseValue::Map(map), ResponseValue::from(false)]);

        let json = serde_json::to_string(&value).unwrap();
        let back: ResponseValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
