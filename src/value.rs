//! Parameter values before and after validation
//!
//! [`ParameterInput`] is what a caller supplies (JSON scalars or arrays),
//! [`ValidatedParameters`] is what the validator hands back. Both keep the
//! caller's key order. A repeated key keeps the position of its first
//! occurrence and the value of its last.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A caller-supplied value, prior to any casting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    /// Integers above `i64::MAX`
    UInteger(u64),
    Float(f64),
    String(String),
    Sequence(Vec<ParamValue>),
}

impl ParamValue {
    pub fn is_sequence(&self) -> bool {
        matches!(self, ParamValue::Sequence(_))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(ParamValue::UInteger(value), ParamValue::Integer)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(v) => write!(f, "{v}"),
            ParamValue::UInteger(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v:?}"),
            ParamValue::String(v) => write!(f, "{v:?}"),
            ParamValue::Sequence(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// The typed result of casting one parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidatedValue {
    Integer(i64),
    UInteger(u64),
    Float(f64),
    String(String),
    /// Only produced for sequence-capable parameters given a sequence
    Sequence(Vec<ValidatedValue>),
}

impl fmt::Display for ValidatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatedValue::Integer(v) => write!(f, "{v}"),
            ValidatedValue::UInteger(v) => write!(f, "{v}"),
            ValidatedValue::Float(v) => write!(f, "{v:?}"),
            ValidatedValue::String(v) => f.write_str(v),
            ValidatedValue::Sequence(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

/// Caller-supplied parameters, in the caller's order
pub type ParameterInput = IndexMap<String, ParamValue>;

/// Validated, typed parameters, in the caller's order
pub type ValidatedParameters = IndexMap<String, ValidatedValue>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_order() {
        let input: ParameterInput =
            serde_json::from_str(r#"{"top_k": 40, "seed": "7", "temperature": 0.5}"#).unwrap();
        let keys: Vec<&str> = input.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["top_k", "seed", "temperature"]);
        assert_eq!(input.get("top_k"), Some(&ParamValue::Integer(40)));
        assert_eq!(input.get("seed"), Some(&ParamValue::from("7")));
        assert_eq!(input.get("temperature"), Some(&ParamValue::Float(0.5)));
    }

    #[test]
    fn test_deserialize_sequence_value() {
        let input: ParameterInput = serde_json::from_str(r#"{"stop": ["a", 1]}"#).unwrap();
        assert_eq!(
            input.get("stop"),
            Some(&ParamValue::Sequence(vec![
                ParamValue::from("a"),
                ParamValue::Integer(1)
            ]))
        );
    }

    #[test]
    fn test_deserialize_integer_above_i64_max() {
        let input: ParameterInput =
            serde_json::from_str(r#"{"seed": 18446744073709551615, "top_k": -1}"#).unwrap();
        assert_eq!(input.get("seed"), Some(&ParamValue::UInteger(u64::MAX)));
        assert_eq!(input.get("top_k"), Some(&ParamValue::Integer(-1)));
        assert_eq!(ParamValue::from(7_u64), ParamValue::Integer(7));
    }

    #[test]
    fn test_deserialize_rejects_booleans_and_nulls() {
        assert!(serde_json::from_str::<ParameterInput>(r#"{"seed": true}"#).is_err());
        assert!(serde_json::from_str::<ParameterInput>(r#"{"seed": null}"#).is_err());
        assert!(serde_json::from_str::<ParameterInput>(r#"["seed"]"#).is_err());
    }

    #[test]
    fn test_repeated_key_keeps_first_position_and_last_value() {
        let input: ParameterInput =
            serde_json::from_str(r#"{"seed": 1, "top_k": 2, "seed": 3}"#).unwrap();
        let entries: Vec<(&str, &ParamValue)> =
            input.iter().map(|(k, v)| (k.as_str(), v)).collect();
        assert_eq!(
            entries,
            vec![
                ("seed", &ParamValue::Integer(3)),
                ("top_k", &ParamValue::Integer(2))
            ]
        );
    }

    #[test]
    fn test_validated_serializes_in_order() {
        let mut params = ValidatedParameters::new();
        params.insert("temperature".to_string(), ValidatedValue::Float(0.8));
        params.insert(
            "stop".to_string(),
            ValidatedValue::Sequence(vec![
                ValidatedValue::String("a".to_string()),
                ValidatedValue::String("b".to_string()),
            ]),
        );
        params.insert("seed".to_string(), ValidatedValue::Integer(42));
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"temperature":0.8,"stop":["a","b"],"seed":42}"#
        );
    }

    #[test]
    fn test_param_value_display() {
        assert_eq!(ParamValue::from("not-a-number").to_string(), "\"not-a-number\"");
        assert_eq!(ParamValue::Integer(3).to_string(), "3");
        assert_eq!(ParamValue::Float(1.0).to_string(), "1.0");
        assert_eq!(
            ParamValue::from(vec!["a", "b"]).to_string(),
            "[\"a\", \"b\"]"
        );
    }

    #[test]
    fn test_validated_value_display() {
        assert_eq!(ValidatedValue::String("x y".to_string()).to_string(), "x y");
        assert_eq!(ValidatedValue::Float(0.25).to_string(), "0.25");
        assert_eq!(
            ValidatedValue::Sequence(vec![ValidatedValue::String("a".to_string())]).to_string(),
            "[a]"
        );
    }
}
