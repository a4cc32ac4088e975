//! envfile library.
//!
//! Reads configuration values (typically secrets such as encryption keys) from
//! files whose paths are passed through environment variables, e.g.
//! `ENCRYPT_KEY_FILE=/run/secrets/encrypt_key`.
//!
//! ## Structure
//!
//! - `use_cases/` - The env-file reader (single and batch reads)
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `error` - Error type shared by every read operation

pub mod error;
pub mod infrastructure;
pub mod use_cases;

pub use error::EnvFileError;
pub use infrastructure::config::{ReaderConfig, LINE_SEPARATOR};
pub use infrastructure::environment::{MapEnvironment, SystemEnvironment};
pub use infrastructure::ports::{EnvironmentPort, PropertyStorePort};
pub use infrastructure::property_store::{system_properties, InMemoryPropertyStore};
pub use use_cases::env_file::EnvFileReader;
