//! Core types for convoy.
//!
//! This crate defines the resolved run configuration ([`ConvoyConfig`]) and the
//! mapping from the host CPU architecture to the identifier Consul's build
//! system uses in its output paths ([`arch`]).

pub mod arch;
pub mod config;

pub use config::{CONSUL_LOCATION_ENV, ConfigError, ConvoyConfig};
