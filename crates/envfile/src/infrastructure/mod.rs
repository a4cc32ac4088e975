//! Infrastructure implementations.
//!
//! Contains port traits and their adapters for the process environment and
//! the property store.

pub mod config;
pub mod environment;
pub mod ports;
pub mod property_store;
