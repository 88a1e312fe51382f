//! Reads and writes that go straight to the environment without an
//! [`EnvCfg`](crate::EnvCfg).
//!
//! ```
//! let debug = envcfg::read::<bool>("DEBUG_MODE").with_default(false);
//! let workers: Option<i32> = envcfg::read_optional("WORKERS");
//! # let _ = (debug, workers);
//! ```

use tracing::debug;

use crate::{
    env::{EnvRead, EnvWrite, SystemEnv},
    error::Error,
    parser::ParseError,
    value::Scalar,
};

/// The outcome of a direct read, consumed either strictly with
/// [`require`](Lookup::require) or leniently with
/// [`with_default`](Lookup::with_default).
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Lookup<T> {
    key: String,
    state: Result<Option<T>, ParseError>,
}

impl<T: Scalar> Lookup<T> {
    fn resolve(key: &str, raw: &str) -> Self {
        let state = if raw.is_empty() {
            Ok(None)
        } else {
            T::parse(raw).map(Some)
        };

        Lookup {
            key: key.to_owned(),
            state,
        }
    }
}

impl<T> Lookup<T> {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The parsed value, failing with [`Error::NoValue`] when the variable is
    /// unset or empty and [`Error::Parse`] when it does not parse.
    pub fn require(self) -> Result<T, Error> {
        match self.state {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(Error::NoValue { key: self.key }),
            Err(error) => Err(Error::Parse(error)),
        }
    }

    /// The parsed value, or `fallback` when it is missing or unparseable.
    pub fn with_default(self, fallback: T) -> T {
        self.ok().unwrap_or(fallback)
    }

    pub fn ok(self) -> Option<T> {
        self.state.ok().flatten()
    }
}

/// Reads `key` from the process environment.
pub fn read<T: Scalar>(key: &str) -> Lookup<T> {
    read_from(&SystemEnv, key)
}

pub fn read_from<T: Scalar, E: EnvRead + ?Sized>(env: &E, key: &str) -> Lookup<T> {
    Lookup::resolve(key, &env.var(key))
}

/// Reads `key` from the process environment, with every failure as `None`.
pub fn read_optional<T: Scalar>(key: &str) -> Option<T> {
    read::<T>(key).ok()
}

pub fn read_optional_from<T: Scalar, E: EnvRead + ?Sized>(env: &E, key: &str) -> Option<T> {
    read_from::<T, E>(env, key).ok()
}

/// Sets `key` in the process environment.
///
/// `key` must be non-empty and must not contain `=`. With `overwrite` set to
/// `false` an existing value is left as it is.
pub fn set_var(key: &str, value: &str, overwrite: bool) -> Result<(), Error> {
    set_var_in(&SystemEnv, key, value, overwrite)
}

pub fn set_var_in<E: EnvWrite + ?Sized>(
    env: &E,
    key: &str,
    value: &str,
    overwrite: bool,
) -> Result<(), Error> {
    if key.is_empty() || key.contains('=') {
        return Err(Error::InvalidName {
            name: key.to_owned(),
        });
    }

    if env.set_var(key, value, overwrite) {
        debug!(key, overwrite, "set environment variable");
        Ok(())
    } else {
        Err(Error::Write {
            name: key.to_owned(),
        })
    }
}

/// Sets `key` in the process environment, reporting failure as `false`.
///
/// Unlike [`set_var`] the name is not validated here; only whatever the
/// environment itself refuses is caught.
pub fn try_set_var(key: &str, value: &str, overwrite: bool) -> bool {
    try_set_var_in(&SystemEnv, key, value, overwrite)
}

pub fn try_set_var_in<E: EnvWrite + ?Sized>(
    env: &E,
    key: &str,
    value: &str,
    overwrite: bool,
) -> bool {
    env.set_var(key, value, overwrite)
}
