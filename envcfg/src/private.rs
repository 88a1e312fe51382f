//! Internal items used by the `EnvConfig` derive macro.
//!
//! These are not meant to be used directly by users of the library.
pub use crate::cfg::EnvCfg;
pub use crate::env::{EnvRead, SystemEnv};
pub use crate::error::{EnvConfigErrors, Error};
pub use crate::spec::{Spec, SpecMap};
pub use crate::value::{Scalar, Value};

/// The spec entry for a field of type `T` with no default.
pub fn hint<T: Scalar>() -> Spec {
    Spec::Hint(T::KIND)
}

/// The spec entry for a field of type `T` defaulting to `default`.
pub fn default<T: Scalar>(default: T) -> Spec {
    Spec::Default(default.into_value())
}

pub trait EnvConfig: Sized {
    fn fields() -> Vec<Field>;

    fn from_cfg<E>(cfg: &EnvCfg<E>) -> Result<Self, EnvConfigErrors>;
}

/// One field of a struct deriving `EnvConfig`.
pub struct Field {
    /// `Struct.field`, used to label errors.
    pub path: &'static str,
    pub key: &'static str,
    pub spec: Spec,
}

pub fn spec(fields: &[Field]) -> SpecMap {
    fields
        .iter()
        .map(|field| (field.key.to_owned(), field.spec.clone()))
        .collect()
}

/// One `KEY=default` line per field, in declaration order.
pub fn requirements(fields: &[Field], out: &mut String) {
    for field in fields {
        out.push_str(field.key);
        out.push('=');
        if let Spec::Default(default) = &field.spec {
            out.push_str(&default.to_string());
        }
        out.push('\n');
    }
}

/// Resolves every field on its own so that all resolution failures are
/// reported, not just the first.
pub fn load<E: EnvRead>(env: E, fields: &[Field]) -> Result<EnvCfg<E>, EnvConfigErrors> {
    let mut cfg = EnvCfg::with_env(env);
    let mut errors = EnvConfigErrors::new();

    for field in fields {
        let entry = SpecMap::from([(field.key.to_owned(), field.spec.clone())]);
        if let Err(error) = cfg.init(&entry) {
            errors.add(field.path, error);
        }
    }

    if errors.has_errors() {
        Err(errors)
    } else {
        Ok(cfg)
    }
}

pub fn required<T: Scalar, E>(
    cfg: &EnvCfg<E>,
    path: &str,
    key: &str,
    errors: &mut EnvConfigErrors,
) -> Result<T, ()> {
    cfg.get::<T>(key).map_err(|error| errors.add(path, error))
}

/// Like [`required`], but a key that resolved to no value is `None`.
pub fn optional<T: Scalar, E>(
    cfg: &EnvCfg<E>,
    path: &str,
    key: &str,
    errors: &mut EnvConfigErrors,
) -> Result<Option<T>, ()> {
    match cfg.get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(Error::NoValue { .. }) => Ok(None),
        Err(error) => {
            errors.add(path, error);
            Err(())
        }
    }
}
