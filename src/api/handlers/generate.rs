//! Identifier generation handlers.
//!
//! Every handler returns a plain string, encoded according to the request's
//! `Accept` header by [`crate::api::negotiate`].

use axum::extract::Path;
use serde::Deserialize;

use crate::api::length::ResolvedLength;
use crate::api::negotiate::{Accept, Negotiated};
use crate::error::AppError;
use crate::generator::{self, Charset, UuidVersion, nanoid, typeid, uuids};

#[derive(Debug, Deserialize)]
pub struct FromParams {
    pub characters: String,
}

#[derive(Debug, Deserialize)]
pub struct UuidV5Params {
    pub value: String,
    pub namespace: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypeIdParams {
    pub prefix: Option<String>,
}

/// Random hash over `charset`.
///
/// # Endpoints
///
/// `GET /{length?}`, `GET /alpha/{length?}`, `GET /numeric/{length?}`, ...
/// (one per named character set)
pub async fn hash_handler(charset: Charset, length: ResolvedLength, accept: Accept) -> Negotiated {
    accept.respond(generator::generate_hash(length.get(), &charset))
}

/// Random hash over a caller-supplied character set.
///
/// # Endpoint
///
/// `GET /from/{characters}/{length?}`
pub async fn from_handler(
    Path(params): Path<FromParams>,
    length: ResolvedLength,
    accept: Accept,
) -> Negotiated {
    accept.respond(generator::generate_from(length.get(), &params.characters))
}

/// Random UUID v4.
///
/// # Endpoint
///
/// `GET /uuid`
pub async fn uuid_handler(accept: Accept) -> Negotiated {
    accept.respond(uuids::generate(UuidVersion::V4).to_string())
}

/// UUID of the requested version.
///
/// # Endpoint
///
/// `GET /uuid/{version}`
///
/// # Errors
///
/// Returns 400 Bad Request for `v5` (which needs a value) and for any
/// version outside `v4`, `v6`, `v7`.
pub async fn uuid_version_handler(
    Path(version): Path<String>,
    accept: Accept,
) -> Result<Negotiated, AppError> {
    let version: UuidVersion = version.parse()?;
    Ok(accept.respond(uuids::generate(version).to_string()))
}

/// Name-based UUID v5.
///
/// # Endpoint
///
/// `GET /uuid/v5/{value}/{namespace?}`
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown namespace.
pub async fn uuid_v5_handler(
    Path(params): Path<UuidV5Params>,
    accept: Accept,
) -> Result<Negotiated, AppError> {
    let uuid = uuids::generate_v5(&params.value, params.namespace.as_deref())?;
    Ok(accept.respond(uuid.to_string()))
}

/// 21-character nanoid.
///
/// # Endpoint
///
/// `GET /nanoid`
pub async fn nanoid_handler(accept: Accept) -> Negotiated {
    accept.respond(nanoid::generate())
}

/// Typeid with an optional prefix.
///
/// # Endpoint
///
/// `GET /typeid/{prefix?}`
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid prefix.
pub async fn typeid_handler(
    Path(params): Path<TypeIdParams>,
    accept: Accept,
) -> Result<Negotiated, AppError> {
    Ok(accept.respond(typeid::generate(params.prefix.as_deref())?))
}
