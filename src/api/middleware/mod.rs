//! HTTP middleware applied around the router.
//!
//! Provides the help short-circuit, CORS and request tracing layers.

pub mod cors;
pub mod help;
pub mod tracing;
