use std::{error::Error as StdError, fmt};

use crate::{parser::ParseError, value::Kind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A direct read found a value that does not parse as the requested kind.
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("'{key}' was never declared in a resolved spec")]
    KeyNotFound { key: String },
    #[error("no value for '{key}'")]
    NoValue { key: String },
    #[error("'{key}' holds a {found} value, not {expected}")]
    TypeMismatch {
        key: String,
        expected: Kind,
        found: Kind,
    },
    #[error("invalid environment variable name \"{name}\"")]
    InvalidName { name: String },
    #[error("failed to set environment variable '{name}'")]
    Write { name: String },
    /// A type-hinted key whose environment value failed to parse.
    #[error("failed to resolve '{key}': {source}")]
    Resolution { key: String, source: ParseError },
}

impl Error {
    /// The environment key the error is about, when there is one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::Parse(_) => None,
            Error::KeyNotFound { key }
            | Error::NoValue { key }
            | Error::TypeMismatch { key, .. }
            | Error::Resolution { key, .. } => Some(key),
            Error::InvalidName { name } | Error::Write { name } => Some(name),
        }
    }
}

/// A single field that could not be populated by a derived `from_cfg`.
#[derive(Debug)]
pub struct EnvConfigError {
    pub path: String,
    pub error: Error,
}

impl fmt::Display for EnvConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`: {}", self.path, self.error)
    }
}

impl StdError for EnvConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

/// A collection of errors encountered while building a derived
/// configuration struct.
///
/// Resolution failures and per-field read failures are all collected rather
/// than stopping at the first one, so every problem can be fixed in one go.
///
/// # Display Format
///
/// ```text
/// 2 configuration errors:
///   1. `Config.port`: failed to resolve 'PORT': expected int32, found "http"
///   2. `Config.host`: no value for 'HOST'
/// ```
#[derive(Debug, Default)]
pub struct EnvConfigErrors(Vec<EnvConfigError>);

impl EnvConfigErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<String>, error: Error) {
        self.0.push(EnvConfigError {
            path: path.into(),
            error,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnvConfigError> {
        self.0.iter()
    }
}

impl fmt::Display for EnvConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            1 => writeln!(f, "1 configuration error:")?,
            n => writeln!(f, "{n} configuration errors:")?,
        }

        for (i, error) in self.0.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl StdError for EnvConfigErrors {}
