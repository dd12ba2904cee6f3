//! Identifier generation facade.
//!
//! Thin wrappers around `rand` and `uuid` that take already-normalized
//! parameters. Input validation that can fail (UUID versions, v5 namespaces,
//! typeid prefixes) returns [`crate::error::AppError::Validation`].
//!
//! - [`hash`] - random strings over named or custom character sets
//! - [`uuids`] - UUID v4, v5, v6 and v7
//! - [`nanoid`] - 21-character URL-safe identifiers
//! - [`typeid`] - prefixed, time-ordered identifiers

pub mod hash;
pub mod nanoid;
pub mod typeid;
pub mod uuids;

pub use hash::{Charset, generate_from, generate_hash};
pub use uuids::UuidVersion;

/// The generation a catalog route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Hash over a fixed character set, `{length?}` trailing.
    Hash(Charset),
    /// Hash over the `{characters}` path segment.
    FromCharacters,
    /// UUID v4.
    Uuid,
    /// UUID of the `{version}` path segment.
    UuidVersion,
    /// Name-based UUID v5 of `{value}` in `{namespace?}`.
    UuidV5,
    Nanoid,
    TypeId,
}
