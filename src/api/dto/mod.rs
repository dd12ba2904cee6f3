//! Data Transfer Objects for help and health responses.
//!
//! All DTOs are serialized with Serde; none are deserialized from requests.

pub mod health;
pub mod help;
