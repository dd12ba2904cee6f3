//! Route catalog: the ordered, read-only table of documented routes.
//!
//! The catalog is built once at startup and shared through
//! [`crate::state::AppState`]. It drives three things:
//!
//! - route registration ([`crate::routes::app_router`])
//! - help lookups ([`RouteCatalog::find_match`])
//! - the `404` payload listing available routes
//!
//! Lookups walk the routes in declaration order and the first template that
//! matches wins, so more specific templates must not be shadowed by earlier
//! ones. The root template only matches numeric paths, see [`template`].

pub mod template;

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::generator::{Charset, Endpoint};
pub use template::{PathTemplate, Segment, TemplateError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("route template '{0}' is declared more than once")]
    Duplicate(String),
}

/// Example for a route: a bare response, or a request path with its response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RouteExample {
    Response(String),
    Request { path: String, response: String },
}

/// A documented route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDescriptor {
    pub path: PathTemplate,
    pub description: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<RouteExample>,
    #[serde(skip)]
    pub endpoint: Endpoint,
}

impl RouteDescriptor {
    pub fn new(
        template: &str,
        description: impl Into<String>,
        endpoint: Endpoint,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            path: PathTemplate::parse(template)?,
            description: description.into(),
            parameters: BTreeMap::new(),
            example: None,
            endpoint,
        })
    }

    pub fn param(mut self, name: impl Into<String>, doc: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), doc.into());
        self
    }

    /// Example with an explicit request path.
    pub fn example(mut self, path: impl Into<String>, response: impl Into<String>) -> Self {
        self.example = Some(RouteExample::Request {
            path: path.into(),
            response: response.into(),
        });
        self
    }

    /// Example whose request path is generated from the template.
    pub fn sample(mut self, response: impl Into<String>) -> Self {
        self.example = Some(RouteExample::Request {
            path: self.path.sample_path(),
            response: response.into(),
        });
        self
    }

    /// Example given as a bare response.
    pub fn example_response(mut self, response: impl Into<String>) -> Self {
        self.example = Some(RouteExample::Response(response.into()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<RouteDescriptor>,
}

impl RouteCatalog {
    /// Builds a catalog from routes in lookup order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Duplicate`] if two routes share a template.
    pub fn from_routes(routes: Vec<RouteDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.path.as_str()) {
                return Err(CatalogError::Duplicate(route.path.to_string()));
            }
        }
        Ok(Self { routes })
    }

    /// The service's routes, documented with `default_length`.
    pub fn builtin(default_length: u32) -> Result<Self, CatalogError> {
        let length = format!("Length of hash (default: {default_length})");
        let hash = |template: &str, description: &str, charset: Charset| {
            RouteDescriptor::new(template, description, Endpoint::Hash(charset))
                .map(|r| r.param("length", length.as_str()))
        };

        let routes = vec![
            hash("/{length?}", "Generate alphanumeric hash", Charset::ALPHANUMERIC)?
                .example("/15", "A1b2C3d4E5f6G7h"),
            hash("/alpha/{length?}", "Generate alphabetic-only hash", Charset::ALPHA)?
                .example("/alpha/8", "AbCdEfGh"),
            hash("/numeric/{length?}", "Generate numeric-only hash", Charset::NUMERIC)?
                .example("/numeric/6", "123456"),
            hash(
                "/uppercase/{length?}",
                "Generate uppercase letters only",
                Charset::UPPERCASE,
            )?
            .example("/uppercase/5", "ABCDE"),
            hash(
                "/lowercase/{length?}",
                "Generate lowercase letters only",
                Charset::LOWERCASE,
            )?
            .example("/lowercase/12", "abcdefghijkl"),
            hash(
                "/uppercase-numeric/{length?}",
                "Generate uppercase letters and numbers",
                Charset::UPPERCASE_NUMERIC,
            )?
            .example("/uppercase-numeric/8", "A1B2C3D4"),
            hash(
                "/lowercase-numeric/{length?}",
                "Generate lowercase letters and numbers",
                Charset::LOWERCASE_NUMERIC,
            )?
            .example("/lowercase-numeric/10", "a1b2c3d4e5"),
            hash(
                "/alpha-symbols/{length?}",
                "Generate letters, numbers and symbols",
                Charset::ALPHA_SYMBOLS,
            )?
            .example("/alpha-symbols/7", "A!b@C#d"),
            hash(
                "/only-symbols/{length?}",
                "Generate symbols only",
                Charset::ONLY_SYMBOLS,
            )?
            .example("/only-symbols/4", "!@#$"),
            hash(
                "/alpha-numeric/{length?}",
                "Generate letters and numbers (alias for root)",
                Charset::ALPHANUMERIC,
            )?
            .example("/alpha-numeric/9", "A1b2C3d4E"),
            RouteDescriptor::new(
                "/from/{characters}/{length?}",
                "Generate hash from custom character set",
                Endpoint::FromCharacters,
            )?
            .param("characters", "Custom character set to use")
            .param("length", length.as_str())
            .sample("ABCCCAACBB"),
            RouteDescriptor::new("/uuid", "Generate a random UUID (v4)", Endpoint::Uuid)?
                .sample("0b5e0f2c-7d3a-4a8e-9f1e-3c2d4b6a8e10"),
            RouteDescriptor::new(
                "/uuid/{version}",
                "Generate a UUID of the given version",
                Endpoint::UuidVersion,
            )?
            .param("version", "UUID version: v4, v6 or v7")
            .example("/uuid/v7", "01890a5d-ac96-774b-bcce-b302099a8057"),
            RouteDescriptor::new(
                "/uuid/v5/{value}/{namespace?}",
                "Generate a name-based UUID (v5)",
                Endpoint::UuidV5,
            )?
            .param("value", "Name to hash")
            .param(
                "namespace",
                "Namespace: dns, url, oid, x500 or a UUID (default: dns)",
            )
            .sample("cfbff0d1-9375-5685-968c-48ce8b15ae17"),
            RouteDescriptor::new("/nanoid", "Generate a 21-character nanoid", Endpoint::Nanoid)?
                .example_response("V1StGXR8_Z5jdHi6B-myT"),
            RouteDescriptor::new(
                "/typeid/{prefix?}",
                "Generate a typeid (optionally prefixed)",
                Endpoint::TypeId,
            )?
            .param(
                "prefix",
                "Type prefix: lowercase letters and underscores, up to 63 characters",
            )
            .sample("user_01h455vb4pex5vsknk084sn02q"),
        ];

        Self::from_routes(routes)
    }

    /// All routes, in lookup order.
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Raw templates, in lookup order.
    pub fn templates(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.path.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First route whose template matches `path`.
    pub fn find_match(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.path.matches(path))
    }
}
