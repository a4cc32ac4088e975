//! Environment adapters.

use std::collections::HashMap;

use crate::infrastructure::ports::EnvironmentPort;

/// Process environment.
///
/// Values that are not valid Unicode are treated as unset.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentPort for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory environment.
///
/// Useful for embedding callers that assemble their configuration up front,
/// and for tests that must not touch the process environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentPort for MapEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_environment_reports_unset_variable_as_none() {
        let env = SystemEnvironment::new();

        assert_eq!(env.get_var("ENVFILE_TEST_VARIABLE_THAT_IS_NEVER_SET"), None);
    }

    #[test]
    fn system_environment_reads_path() {
        // PATH is present in every environment the tests run in
        let env = SystemEnvironment::new();

        assert!(env.get_var("PATH").is_some());
    }

    #[test]
    fn map_environment_returns_configured_values() {
        let env = MapEnvironment::new()
            .with_var("ENCRYPT_KEY_FILE", "/run/secrets/key")
            .with_var("EMPTY", "");

        assert_eq!(
            env.get_var("ENCRYPT_KEY_FILE").as_deref(),
            Some("/run/secrets/key")
        );
        assert_eq!(env.get_var("EMPTY").as_deref(), Some(""));
        assert_eq!(env.get_var("MISSING"), None);
    }

    #[test]
    fn map_environment_collects_from_pairs() {
        let env: MapEnvironment = [("KEY_FILE", "/run/secrets/key")].into_iter().collect();

        assert_eq!(env.get_var("KEY_FILE").as_deref(), Some("/run/secrets/key"));
        assert_eq!(env.get_var("OTHER_FILE"), None);
    }
}
