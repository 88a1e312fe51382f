use std::collections::{HashMap, hash_map};

use tracing::{debug, warn};

use crate::{
    env::{EnvRead, SystemEnv},
    error::Error,
    parser,
    spec::{Spec, SpecMap},
    value::{Kind, Scalar, Value},
};

/// Rendering of a key that resolved to no value when iterating.
pub const NO_VALUE: &str = "nullopt";

/// A store of environment values resolved from a [`SpecMap`].
///
/// The store starts empty. [`init`](EnvCfg::init) is the only thing that
/// writes to it and may be called any number of times; later calls add keys
/// and overwrite existing ones. Every accessor hands out copies.
///
/// ```
/// use envcfg::{EnvCfg, Kind, Spec, SpecMap, env::InMemoryEnv};
///
/// let env: InMemoryEnv = [("PORT", "422")].into_iter().collect();
/// let mut cfg = EnvCfg::with_env(env);
///
/// cfg.init(&SpecMap::from([
///     ("PORT".to_owned(), Spec::from(Kind::Int32)),
///     ("HOST".to_owned(), Spec::from("localhost")),
/// ]))?;
///
/// assert_eq!(cfg.get::<i32>("PORT")?, 422);
/// assert_eq!(cfg.get::<String>("HOST")?, "localhost");
/// # Ok::<(), envcfg::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct EnvCfg<E = SystemEnv> {
    env: E,
    store: HashMap<String, Option<Value>>,
}

impl EnvCfg {
    /// An empty store backed by the process environment.
    pub fn new() -> Self {
        Self::with_env(SystemEnv)
    }
}

impl<E: EnvRead> EnvCfg<E> {
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            store: HashMap::new(),
        }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Resolves every entry of `spec` against the environment and records the
    /// result.
    ///
    /// An empty variable is treated exactly like an unset one. A [`Spec::Hint`]
    /// whose variable does not parse fails with [`Error::Resolution`]. A
    /// [`Spec::Default`] never fails: an unparseable variable falls back to
    /// the default.
    ///
    /// # Partial failure
    ///
    /// There is no atomicity. Resolution stops at the first failing entry,
    /// entries after it are skipped, and entries before it stay written. Since
    /// the map is unordered, which entries landed is unspecified; treat the
    /// store as unreliable until a later `init` succeeds.
    pub fn init(&mut self, spec: &SpecMap) -> Result<(), Error> {
        for (key, entry) in spec {
            let raw = self.env.var(key);

            let resolved = match entry {
                Spec::Hint(kind) => resolve_hint(key, *kind, &raw)?,
                Spec::Default(default) => Some(resolve_default(key, default, &raw)),
                Spec::Absent => None,
            };

            debug!(key = key.as_str(), value = ?resolved, "resolved environment entry");
            self.store.insert(key.clone(), resolved);
        }

        Ok(())
    }
}

impl<E> EnvCfg<E> {
    /// Returns a copy of the value stored for `key`.
    ///
    /// Fails when `key` was never resolved, resolved to no value, or holds a
    /// value of another kind than `T`.
    pub fn get<T: Scalar>(&self, key: &str) -> Result<T, Error> {
        self.lookup(key)
    }

    /// Like [`get`](EnvCfg::get), but every failure becomes `None`.
    pub fn get_optional<T: Scalar>(&self, key: &str) -> Option<T> {
        self.lookup(key).ok()
    }

    /// Like [`get_optional`](EnvCfg::get_optional), with the value on the heap.
    pub fn get_boxed<T: Scalar>(&self, key: &str) -> Option<Box<T>> {
        self.lookup(key).ok().map(Box::new)
    }

    /// True when `key` was resolved to some value, of any kind.
    pub fn has_value(&self, key: &str) -> bool {
        matches!(self.store.get(key), Some(Some(_)))
    }

    /// True when `key` was resolved to a value of exactly `T`'s kind.
    pub fn is_type<T: Scalar>(&self, key: &str) -> bool {
        self.kind_of(key) == Some(T::KIND)
    }

    pub fn kind_of(&self, key: &str) -> Option<Kind> {
        self.store.get(key)?.as_ref().map(Value::kind)
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.store.keys().map(String::as_str)
    }

    /// Iterates `(key, rendered value)` pairs in the store's own, unspecified,
    /// order. Keys without a value render as [`NO_VALUE`].
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.store.iter(),
        }
    }

    fn lookup<T: Scalar>(&self, key: &str) -> Result<T, Error> {
        let slot = self.store.get(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_owned(),
        })?;
        let value = slot.as_ref().ok_or_else(|| Error::NoValue {
            key: key.to_owned(),
        })?;

        T::from_value(value).ok_or_else(|| Error::TypeMismatch {
            key: key.to_owned(),
            expected: T::KIND,
            found: value.kind(),
        })
    }
}

fn resolve_hint(key: &str, kind: Kind, raw: &str) -> Result<Option<Value>, Error> {
    if raw.is_empty() {
        return Ok(None);
    }

    parser::parse(kind, raw)
        .map(Some)
        .map_err(|source| Error::Resolution {
            key: key.to_owned(),
            source,
        })
}

fn resolve_default(key: &str, default: &Value, raw: &str) -> Value {
    if raw.is_empty() {
        return default.clone();
    }

    match parser::parse(default.kind(), raw) {
        Ok(value) => value,
        Err(error) => {
            warn!(
                key,
                %error,
                %default,
                "ignoring unparseable environment value, using default"
            );
            default.clone()
        }
    }
}

/// Iterator returned by [`EnvCfg::iter`].
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, Option<Value>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| {
            let rendered = match value {
                Some(value) => value.to_string(),
                None => NO_VALUE.to_owned(),
            };
            (key.as_str(), rendered)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a, E> IntoIterator for &'a EnvCfg<E> {
    type Item = (&'a str, String);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
