use std::env;

use super::{EnvRead, EnvWrite};

/// Zero-sized type that delegates to the process environment.
///
/// # Thread Safety
///
/// Writes go through [`std::env::set_var`], which is only sound while no
/// other thread reads or writes the environment. Callers that write from
/// more than one thread must serialise access themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvRead for SystemEnv {
    #[inline]
    fn var(&self, name: &str) -> String {
        env::var(name).unwrap_or_default()
    }
}

impl EnvWrite for SystemEnv {
    fn set_var(&self, name: &str, value: &str, overwrite: bool) -> bool {
        // `std::env::set_var` panics on these instead of reporting failure.
        if name.is_empty() || name.contains(['=', '\0']) || value.contains('\0') {
            return false;
        }

        if !overwrite && env::var_os(name).is_some() {
            return true;
        }

        // SAFETY: see the thread safety note on `SystemEnv`.
        unsafe { env::set_var(name, value) };
        true
    }
}
