//! Use cases.

pub mod env_file;
