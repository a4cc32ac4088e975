//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Environment variable access (could swap std::env -> a fixed map)
//! - The property store that batch reads publish into

// =============================================================================
// Environment Port
// =============================================================================

/// Resolves the variables that name env-files.
///
/// Blank and unset values are both treated as "not configured" by the
/// reader, so implementations need not distinguish them.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentPort: Send + Sync {
    /// Value of `key`, or None when unset.
    fn get_var(&self, key: &str) -> Option<String>;
}

// =============================================================================
// Property Store Port
// =============================================================================

/// Port for a named string property store.
///
/// Writes overwrite any previous value for the same name and are visible to
/// every holder of the store afterwards.
#[cfg_attr(test, mockall::automock)]
pub trait PropertyStorePort: Send + Sync {
    fn set_property(&self, name: &str, value: &str);
    fn get_property(&self, name: &str) -> Option<String>;
}
