use std::{cell::RefCell, collections::HashMap};

use super::{EnvRead, EnvWrite};

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability so it can be shared by reference
/// between an [`EnvCfg`](crate::EnvCfg) and the test driving it. Rejects the
/// same names [`SystemEnv`](super::SystemEnv) does.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(name.into(), value.into());
    }

    pub fn remove(&self, name: &str) {
        self.vars.borrow_mut().remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.borrow().contains_key(name)
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self {
            vars: RefCell::new(vars),
        }
    }
}

impl EnvRead for InMemoryEnv {
    fn var(&self, name: &str) -> String {
        self.vars.borrow().get(name).cloned().unwrap_or_default()
    }
}

impl EnvWrite for InMemoryEnv {
    fn set_var(&self, name: &str, value: &str, overwrite: bool) -> bool {
        if name.is_empty() || name.contains(['=', '\0']) || value.contains('\0') {
            return false;
        }

        let mut vars = self.vars.borrow_mut();
        if overwrite || !vars.contains_key(name) {
            vars.insert(name.to_owned(), value.to_owned());
        }
        true
    }
}
