use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::{env, fmt};

use heck::ToShoutySnakeCase;

/// HelperEnv is an immutable snapshot of the process environment.
///
/// It is taken once at startup and handed to every tool lookup and every
/// child process, so the tools the helper runs all see the same variables.
/// Variables are kept as raw OS strings and passed through untouched, even
/// when they are not valid Unicode. Tests build one from an iterator
/// instead of mutating the real environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelperEnv {
    vars: BTreeMap<OsString, OsString>,
}

impl HelperEnv {
    /// snapshots the current process environment
    pub fn snapshot() -> HelperEnv {
        HelperEnv {
            vars: env::vars_os().collect(),
        }
    }

    /// returns the value of a raw environment variable if it exists and
    /// is valid Unicode
    pub fn var(&self, key: &str) -> Option<&str> {
        let value = self.vars.get(OsStr::new(key))?;
        let value = value.to_str();
        if value.is_none() {
            tracing::trace!("${} is not valid Unicode", key);
        }
        value
    }

    /// returns the value of one of the helper's own variables if it is set
    /// to something other than an empty string
    pub fn get(&self, key: HelperEnvKey) -> Option<&str> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let value = self.var(&key_str).filter(|value| !value.is_empty());
        if let Some(value) = value {
            tracing::debug!("read environment variable ${} = {}", &key_str, value);
        }
        value
    }

    /// the search path used to locate external tools
    pub fn search_path(&self) -> Option<&OsStr> {
        self.vars.get(OsStr::new("PATH")).map(OsString::as_os_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for HelperEnv
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        HelperEnv {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// HelperEnvKey defines the environment variables this helper respects.
/// Each is prefixed with `BUILD_HELPER_` and the suffix is the variant name
/// converted from CamelCase to SHOUTY_SNAKE_CASE, so
/// `HelperEnvKey::ProjectRoot` becomes `BUILD_HELPER_PROJECT_ROOT`.
#[derive(Debug, Copy, Clone)]
pub enum HelperEnvKey {
    ProjectRoot,
    NodeVersion,
}

impl fmt::Display for HelperEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{self:?}").to_shouty_snake_case();
        write!(fmt, "BUILD_HELPER_{dbg}")
    }
}
