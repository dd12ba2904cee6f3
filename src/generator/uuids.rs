//! UUID generation (v4, v5, v6, v7).

use serde_json::json;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AppError;

/// Versions served by `/uuid/{version}`.
///
/// v5 is name-based and lives on its own route, so it is deliberately not
/// part of this list.
pub const SUPPORTED_VERSIONS: &[&str] = &["v4", "v6", "v7"];

/// Namespaces accepted by `/uuid/v5/{value}/{namespace?}`.
pub const V5_NAMESPACES: &[&str] = &["dns", "url", "oid", "x500"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidVersion {
    V4,
    V6,
    V7,
}

impl FromStr for UuidVersion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v4" => Ok(Self::V4),
            "v6" => Ok(Self::V6),
            "v7" => Ok(Self::V7),
            "v5" => Err(AppError::bad_request(
                "UUID v5 requires a value: use /uuid/v5/{value}/{namespace?}",
                json!({ "expected": "/uuid/v5/{value}/{namespace?}" }),
            )),
            other => Err(AppError::bad_request(
                format!("Unsupported UUID version '{other}'"),
                json!({ "supported": SUPPORTED_VERSIONS }),
            )),
        }
    }
}

/// Generates a random or time-ordered UUID of the given version.
pub fn generate(version: UuidVersion) -> Uuid {
    match version {
        UuidVersion::V4 => Uuid::new_v4(),
        UuidVersion::V6 => {
            let node_id: [u8; 6] = rand::random();
            Uuid::now_v6(&node_id)
        }
        UuidVersion::V7 => Uuid::now_v7(),
    }
}

/// Generates a name-based v5 UUID for `value`.
///
/// `namespace` is one of [`V5_NAMESPACES`] or a literal UUID; it defaults
/// to `dns`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for an unknown namespace.
pub fn generate_v5(value: &str, namespace: Option<&str>) -> Result<Uuid, AppError> {
    let namespace = match namespace.map(str::to_ascii_lowercase).as_deref() {
        None | Some("dns") => Uuid::NAMESPACE_DNS,
        Some("url") => Uuid::NAMESPACE_URL,
        Some("oid") => Uuid::NAMESPACE_OID,
        Some("x500") => Uuid::NAMESPACE_X500,
        Some(other) => Uuid::parse_str(other).map_err(|_| {
            AppError::bad_request(
                format!("Unknown UUID v5 namespace '{other}'"),
                json!({ "supported": V5_NAMESPACES, "or": "a literal UUID" }),
            )
        })?,
    };

    Ok(Uuid::new_v5(&namespace, value.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_versions() {
        assert_eq!("v4".parse::<UuidVersion>().unwrap(), UuidVersion::V4);
        assert_eq!("V6".parse::<UuidVersion>().unwrap(), UuidVersion::V6);
        assert_eq!("v7".parse::<UuidVersion>().unwrap(), UuidVersion::V7);
    }

    #[test]
    fn test_parse_unsupported_version() {
        let err = "v9".parse::<UuidVersion>().unwrap_err();
        assert!(err.to_string().contains("Unsupported"));
        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details["supported"], json!(["v4", "v6", "v7"]));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_v5_requires_value() {
        let err = "v5".parse::<UuidVersion>().unwrap_err();
        assert!(err.to_string().contains("/uuid/v5/{value}"));
    }

    #[test]
    fn test_generated_versions() {
        assert_eq!(generate(UuidVersion::V4).get_version_num(), 4);
        assert_eq!(generate(UuidVersion::V6).get_version_num(), 6);
        assert_eq!(generate(UuidVersion::V7).get_version_num(), 7);
    }

    #[test]
    fn test_v7_is_time_ordered() {
        let a = generate(UuidVersion::V7);
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = generate(UuidVersion::V7);
        assert!(a < b);
    }

    #[test]
    fn test_v5_is_deterministic() {
        let a = generate_v5("example.com", None).unwrap();
        let b = generate_v5("example.com", Some("dns")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get_version_num(), 5);
        assert_eq!(a.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
    }

    #[test]
    fn test_v5_namespaces_differ() {
        let dns = generate_v5("example.com", Some("dns")).unwrap();
        let url = generate_v5("example.com", Some("URL")).unwrap();
        assert_ne!(dns, url);
    }

    #[test]
    fn test_v5_literal_namespace() {
        let ns = Uuid::NAMESPACE_OID.to_string();
        let literal = generate_v5("x", Some(&ns)).unwrap();
        let named = generate_v5("x", Some("oid")).unwrap();
        assert_eq!(literal, named);
    }

    #[test]
    fn test_v5_unknown_namespace() {
        assert!(generate_v5("x", Some("planet")).is_err());
    }
}
