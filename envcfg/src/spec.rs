use std::collections::HashMap;

use crate::value::{Kind, Value};

/// How a single key should be resolved by [`EnvCfg::init`](crate::EnvCfg::init).
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    /// Parse the environment value as this kind. A value that does not parse
    /// fails the whole `init` call.
    Hint(Kind),
    /// Use the environment value if it parses as the same kind as the
    /// default, otherwise use the default.
    Default(Value),
    /// Record the key with no value.
    Absent,
}

/// The declarative input to [`EnvCfg::init`](crate::EnvCfg::init).
///
/// ```
/// use envcfg::{Kind, Spec, SpecMap};
///
/// let spec = SpecMap::from([
///     ("PORT".to_owned(), Spec::from(Kind::Int32)),
///     ("HOST".to_owned(), Spec::from("localhost")),
///     ("WORKERS".to_owned(), Spec::from(4)),
/// ]);
/// # assert_eq!(spec.len(), 3);
/// ```
pub type SpecMap = HashMap<String, Spec>;

impl From<Kind> for Spec {
    fn from(kind: Kind) -> Self {
        Spec::Hint(kind)
    }
}

impl From<Value> for Spec {
    fn from(value: Value) -> Self {
        Spec::Default(value)
    }
}

impl<T: Into<Spec>> From<Option<T>> for Spec {
    fn from(value: Option<T>) -> Self {
        value.map_or(Spec::Absent, Into::into)
    }
}

macro_rules! default_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Spec {
                fn from(value: $ty) -> Self {
                    Spec::Default(Value::from(value))
                }
            }
        )*
    };
}

default_from!(String, &str, i32, i64, f64, bool);
