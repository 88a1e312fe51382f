//! Conversion of raw environment strings into scalar [`Value`]s.
//!
//! Every function here is pure. Callers are expected to handle the empty
//! string themselves (an empty variable means "no value", not a parse error).

use std::num::{IntErrorKind, ParseIntError};

use crate::value::{Kind, Value};

/// Why a raw string could not be turned into a value of the requested kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string is not a literal of the requested kind at all.
    #[error("expected {kind}, found \"{value}\"")]
    Format { kind: Kind, value: String },
    /// The string is a valid numeric literal that does not fit the kind.
    #[error("\"{value}\" is out of range for {kind}")]
    Range { kind: Kind, value: String },
}

impl ParseError {
    pub fn kind(&self) -> Kind {
        match self {
            ParseError::Format { kind, .. } | ParseError::Range { kind, .. } => *kind,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, ParseError::Range { .. })
    }
}

pub fn parse(kind: Kind, raw: &str) -> Result<Value, ParseError> {
    match kind {
        Kind::Text => Ok(Value::Text(parse_text(raw))),
        Kind::Int32 => parse_i32(raw).map(Value::Int32),
        Kind::Int64 => parse_i64(raw).map(Value::Int64),
        Kind::Float64 => parse_f64(raw).map(Value::Float64),
        Kind::Bool => parse_bool(raw).map(Value::Bool),
    }
}

pub fn parse_text(raw: &str) -> String {
    raw.to_owned()
}

pub fn parse_i32(raw: &str) -> Result<i32, ParseError> {
    raw.parse::<i32>().map_err(|e| int_error(Kind::Int32, raw, &e))
}

pub fn parse_i64(raw: &str) -> Result<i64, ParseError> {
    raw.parse::<i64>().map_err(|e| int_error(Kind::Int64, raw, &e))
}

/// Finite literals too large for `f64` are a range error; only an explicit
/// `inf`/`infinity` spelling parses as infinity.
pub fn parse_f64(raw: &str) -> Result<f64, ParseError> {
    let value = raw.parse::<f64>().map_err(|_| ParseError::Format {
        kind: Kind::Float64,
        value: raw.to_owned(),
    })?;

    if value.is_infinite() && !is_infinity_literal(raw) {
        return Err(ParseError::Range {
            kind: Kind::Float64,
            value: raw.to_owned(),
        });
    }

    Ok(value)
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Only `true` and `false` are accepted, in any ASCII case.
pub fn parse_bool(raw: &str) -> Result<bool, ParseError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParseError::Format {
            kind: Kind::Bool,
            value: raw.to_owned(),
        })
    }
}

fn int_error(kind: Kind, raw: &str, error: &ParseIntError) -> ParseError {
    let value = raw.to_owned();

    match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::Range { kind, value },
        _ => ParseError::Format { kind, value },
    }
}
