use std::fmt;

use crate::parser::{self, ParseError};

/// The scalar kinds a configuration value can take.
///
/// Used on its own as a type hint in a [`SpecMap`](crate::SpecMap): the
/// environment string for that key must parse as this kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    Int32,
    Int64,
    Float64,
    Bool,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Float64 => "float64",
            Kind::Bool => "bool",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved configuration value. Exactly one kind is held and values are
/// never converted between kinds once stored.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::Text,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Float64(_) => Kind::Float64,
            Value::Bool(_) => Kind::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int32(n) => write!(f, "{n}"),
            Value::Int64(n) => write!(f, "{n}"),
            Value::Float64(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
}

/// Rust types that can be read back out of an [`EnvCfg`](crate::EnvCfg) or
/// read directly from the environment.
///
/// Implemented for exactly `String`, `i32`, `i64`, `f64` and `bool`. The
/// trait is sealed, so asking for anything else is a compile error:
///
/// ```compile_fail
/// let cfg = envcfg::EnvCfg::new();
/// let port: Option<u16> = cfg.get_optional::<u16>("PORT");
/// ```
pub trait Scalar: sealed::Sealed + Sized {
    const KIND: Kind;

    /// Returns a copy of the inner value when `value` holds this kind.
    fn from_value(value: &Value) -> Option<Self>;

    fn into_value(self) -> Value;

    fn parse(raw: &str) -> Result<Self, ParseError>;
}

impl Scalar for String {
    const KIND: Kind = Kind::Text;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn parse(raw: &str) -> Result<Self, ParseError> {
        Ok(parser::parse_text(raw))
    }
}

impl Scalar for i32 {
    const KIND: Kind = Kind::Int32;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int32(n) => Some(*n),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Int32(self)
    }

    fn parse(raw: &str) -> Result<Self, ParseError> {
        parser::parse_i32(raw)
    }
}

impl Scalar for i64 {
    const KIND: Kind = Kind::Int64;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int64(n) => Some(*n),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Int64(self)
    }

    fn parse(raw: &str) -> Result<Self, ParseError> {
        parser::parse_i64(raw)
    }
}

impl Scalar for f64 {
    const KIND: Kind = Kind::Float64;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float64(n) => Some(*n),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Float64(self)
    }

    fn parse(raw: &str) -> Result<Self, ParseError> {
        parser::parse_f64(raw)
    }
}

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn parse(raw: &str) -> Result<Self, ParseError> {
        parser::parse_bool(raw)
    }
}
