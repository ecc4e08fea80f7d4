//! Parameter registry
//!
//! This module provides:
//! - The primitive types a parameter can take, each with its own cast
//! - Parameter definitions and name lookup
//! - The built-in set of tuning parameters accepted by the model server

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::value::{ParamValue, ValidatedValue};

/// Primitive type a parameter value is cast to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Primitive {
    Integer,
    Float,
    String,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Integer => "Integer",
            Primitive::Float => "Float",
            Primitive::String => "String",
        }
    }

    /// Cast a scalar to this primitive. Sequences never cast to a scalar.
    pub fn cast(self, value: &ParamValue) -> Option<ValidatedValue> {
        match self {
            Primitive::Integer => cast_integer(value),
            Primitive::Float => cast_float(value).map(ValidatedValue::Float),
            Primitive::String => cast_string(value).map(ValidatedValue::String),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn cast_integer(value: &ParamValue) -> Option<ValidatedValue> {
    match value {
        ParamValue::Integer(v) => Some(ValidatedValue::Integer(*v)),
        ParamValue::UInteger(v) => Some(ValidatedValue::UInteger(*v)),
        ParamValue::Float(v) => {
            let in_range = *v >= i64::MIN as f64 && *v < i64::MAX as f64;
            (v.is_finite() && v.fract() == 0.0 && in_range)
                .then_some(ValidatedValue::Integer(*v as i64))
        }
        ParamValue::String(s) => {
            let s = s.trim();
            s.parse()
                .map(ValidatedValue::Integer)
                .or_else(|_| s.parse().map(ValidatedValue::UInteger))
                .ok()
        }
        ParamValue::Sequence(_) => None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn cast_float(value: &ParamValue) -> Option<f64> {
    let cast = match value {
        ParamValue::Integer(v) => *v as f64,
        ParamValue::UInteger(v) => *v as f64,
        ParamValue::Float(v) => *v,
        ParamValue::String(s) => s.trim().parse().ok()?,
        ParamValue::Sequence(_) => return None,
    };
    cast.is_finite().then_some(cast)
}

fn cast_string(value: &ParamValue) -> Option<String> {
    match value {
        ParamValue::String(s) => Some(s.clone()),
        ParamValue::Integer(v) => Some(v.to_string()),
        ParamValue::UInteger(v) => Some(v.to_string()),
        ParamValue::Float(v) => Some(format!("{v:?}")),
        ParamValue::Sequence(_) => None,
    }
}

/// Definition of one recognized parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDefinition {
    pub name: String,
    pub primitive: Primitive,
    pub allows_sequence: bool,
}

impl ParameterDefinition {
    pub fn scalar(name: impl Into<String>, primitive: Primitive) -> Self {
        Self {
            name: name.into(),
            primitive,
            allows_sequence: false,
        }
    }

    pub fn sequence(name: impl Into<String>, primitive: Primitive) -> Self {
        Self {
            name: name.into(),
            primitive,
            allows_sequence: true,
        }
    }

    /// Human readable type, e.g. `Float` or `String or sequence of String`
    pub fn expected_type(&self) -> String {
        if self.allows_sequence {
            format!("{0} or sequence of {0}", self.primitive)
        } else {
            self.primitive.name().to_string()
        }
    }
}

/// Immutable set of recognized parameters
#[derive(Debug, Clone)]
pub struct ParameterRegistry {
    definitions: Vec<ParameterDefinition>,
    by_name: HashMap<String, usize>,
}

impl ParameterRegistry {
    /// Create a registry from the given definitions. A repeated name keeps its
    /// first definition.
    pub fn new(definitions: Vec<ParameterDefinition>) -> Self {
        let mut unique: Vec<ParameterDefinition> = Vec::with_capacity(definitions.len());
        let mut by_name = HashMap::new();
        for definition in definitions {
            if by_name.contains_key(&definition.name) {
                continue;
            }
            by_name.insert(definition.name.clone(), unique.len());
            unique.push(definition);
        }

        Self {
            definitions: unique,
            by_name,
        }
    }

    /// The shared registry of built-in parameters, built on first use
    pub fn builtin() -> &'static ParameterRegistry {
        static BUILTIN: OnceLock<ParameterRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| ParameterRegistry::new(builtin_parameters()))
    }

    pub fn get(&self, name: &str) -> Option<&ParameterDefinition> {
        self.by_name
            .get(name)
            .and_then(|&idx| self.definitions.get(idx))
    }

    /// Every accepted name, in definition order
    pub fn names(&self) -> Vec<String> {
        self.definitions.iter().map(|d| d.name.clone()).collect()
    }

    pub fn all(&self) -> &[ParameterDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::new(builtin_parameters())
    }
}

/// Tuning parameters accepted by the model server's create endpoint
pub fn builtin_parameters() -> Vec<ParameterDefinition> {
    use Primitive::{Float, Integer};

    vec![
        ParameterDefinition::scalar("mirostat", Integer),
        ParameterDefinition::scalar("mirostat_eta", Float),
        ParameterDefinition::scalar("mirostat_tau", Float),
        ParameterDefinition::scalar("num_ctx", Integer),
        ParameterDefinition::scalar("repeat_last_n", Integer),
        ParameterDefinition::scalar("repeat_penalty", Float),
        ParameterDefinition::scalar("temperature", Float),
        ParameterDefinition::scalar("seed", Integer),
        ParameterDefinition::sequence("stop", Primitive::String),
        ParameterDefinition::scalar("num_predict", Integer),
        ParameterDefinition::scalar("top_k", Integer),
        ParameterDefinition::scalar("top_p", Float),
        ParameterDefinition::scalar("min_p", Float),
    ]
}
