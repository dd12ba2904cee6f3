//! HTTP request handlers.
//!
//! Generation handlers are registered from the route catalog, see
//! [`crate::routes::app_router`].

pub mod fallback;
pub mod generate;
pub mod health;

pub use fallback::not_found_handler;
pub use generate::{
    from_handler, hash_handler, nanoid_handler, typeid_handler, uuid_handler,
    uuid_v5_handler, uuid_version_handler,
};
pub use health::health_handler;
