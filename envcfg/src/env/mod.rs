//! The two environment primitives the rest of the crate is written against.
//!
//! ```
//! use envcfg::env::{EnvRead, SystemEnv};
//!
//! fn database_url<E: EnvRead>(env: &E) -> String {
//!     let url = env.var("DATABASE_URL");
//!     if url.is_empty() { "postgres://localhost".to_owned() } else { url }
//! }
//!
//! let url = database_url(&SystemEnv);
//! ```

mod in_memory;
mod system;

pub use in_memory::InMemoryEnv;
pub use system::SystemEnv;

/// Reads a variable as a string.
///
/// Returns an empty string when the variable is unset, so an unset variable
/// and one set to `""` cannot be told apart.
pub trait EnvRead {
    fn var(&self, name: &str) -> String;
}

/// Writes a variable.
///
/// When `overwrite` is `false` and `name` already exists the current value is
/// kept and the call still reports success. Returns `false` when the
/// underlying store refused the write.
pub trait EnvWrite {
    fn set_var(&self, name: &str, value: &str, overwrite: bool) -> bool;
}

impl<E: EnvRead + ?Sized> EnvRead for &E {
    fn var(&self, name: &str) -> String {
        (**self).var(name)
    }
}

impl<E: EnvWrite + ?Sized> EnvWrite for &E {
    fn set_var(&self, name: &str, value: &str, overwrite: bool) -> bool {
        (**self).set_var(name, value, overwrite)
    }
}
