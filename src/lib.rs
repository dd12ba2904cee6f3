//! # itty-id
//!
//! A small HTTP service that generates random identifiers (hashes, UUIDs,
//! nanoids and typeids) from path-based routes, built with Axum.
//!
//! ## Architecture
//!
//! - **Catalog** ([`catalog`]) - Declared routes, path templates and the path matcher
//! - **Generator** ([`generator`]) - Identifier generation facade over `rand` and `uuid`
//! - **API Layer** ([`api`]) - Handlers, help middleware, length resolution and
//!   content negotiation
//!
//! ## Features
//!
//! - Hashes over named or custom character sets, with a length from the
//!   path or the `length` query parameter
//! - UUID v4, v5, v6 and v7, nanoid and typeid
//! - `?help` on any path returns documentation for the matching route
//! - Plain text by default, JSON when the `Accept` header asks for it
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl localhost:3000/alpha/8
//! curl 'localhost:3000/alpha?help'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
