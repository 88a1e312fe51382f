//! Typed access to environment variables.
//!
//! Declare the keys an application expects in a [`SpecMap`], either as a
//! [`Kind`] the value must parse as or as a default [`Value`], resolve them
//! once with [`EnvCfg::init`], then read them back as `String`, `i32`, `i64`,
//! `f64` or `bool`. The same declaration can be written on a struct with
//! `#[derive(EnvConfig)]`.
//!
//! For one-off reads without a store, see [`read`] and [`read_optional`].

mod cfg;
mod direct;
pub mod env;
mod error;
pub mod parser;
mod spec;
mod value;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use cfg::{EnvCfg, Iter, NO_VALUE};
pub use direct::{
    Lookup, read, read_from, read_optional, read_optional_from, set_var, set_var_in, try_set_var,
    try_set_var_in,
};
/// Declares the environment a struct is loaded from.
///
/// ```
/// use envcfg::{EnvConfig, env::InMemoryEnv};
///
/// #[derive(EnvConfig)]
/// pub struct Server {
///     #[env(from = "SERVER_PORT")]
///     port: i32,
///     #[env(from, default = "localhost")]
///     host: String,
///     #[env(from)]
///     ratio: Option<f64>,
/// }
///
/// let env: InMemoryEnv = [("SERVER_PORT", "8080")].into_iter().collect();
/// let server = Server::from_env_in(&env).unwrap();
/// assert_eq!((server.port, server.host.as_str(), server.ratio), (8080, "localhost", None));
/// ```
///
/// Every field needs `#[env(from)]` or `#[env(from = "NAME")]`:
///
/// ```compile_fail
/// #[derive(envcfg::EnvConfig)]
/// pub struct Server {
///     #[env(default = 8080)]
///     port: i32,
/// }
/// ```
///
/// `Option` fields are already allowed to be missing, so they take no default:
///
/// ```compile_fail
/// #[derive(envcfg::EnvConfig)]
/// pub struct Server {
///     #[env(from, default = 8080)]
///     port: Option<i32>,
/// }
/// ```
///
/// Only structs with named fields are supported:
///
/// ```compile_fail
/// #[derive(envcfg::EnvConfig)]
/// pub struct Port(#[env(from = "PORT")] i32);
/// ```
///
/// The struct must be public:
///
/// ```compile_fail
/// #[derive(envcfg::EnvConfig)]
/// struct Server {
///     #[env(from)]
///     port: i32,
/// }
/// ```
///
/// Two fields cannot read the same variable:
///
/// ```compile_fail
/// #[derive(envcfg::EnvConfig)]
/// pub struct Limits {
///     #[env(from = "LIMIT")]
///     soft: i32,
///     #[env(from = "LIMIT")]
///     hard: i64,
/// }
/// ```
pub use envcfg_derive::EnvConfig;
pub use error::{EnvConfigError, EnvConfigErrors, Error};
pub use parser::ParseError;
pub use spec::{Spec, SpecMap};
pub use value::{Kind, Scalar, Value};
