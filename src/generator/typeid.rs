//! TypeID generation: an optional type prefix plus a base32-encoded UUIDv7.
//!
//! ```text
//! user_01h455vb4pex5vsknk084sn02q
//! └──┘ └────────────────────────┘
//! prefix   26 chars, Crockford base32
//! ```

use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

/// Maximum prefix length.
pub const MAX_PREFIX_LENGTH: usize = 63;

/// Generates a new typeid, prefixed with `prefix` when given.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the prefix is not made of lowercase
/// ASCII letters and underscores, is longer than 63 characters, or starts or
/// ends with an underscore.
pub fn generate(prefix: Option<&str>) -> Result<String, AppError> {
    let suffix = encode(Uuid::now_v7());

    match prefix {
        None | Some("") => Ok(suffix),
        Some(prefix) => {
            validate_prefix(prefix)?;
            Ok(format!("{prefix}_{suffix}"))
        }
    }
}

pub fn validate_prefix(prefix: &str) -> Result<(), AppError> {
    if prefix.len() > MAX_PREFIX_LENGTH {
        return Err(AppError::bad_request(
            format!("Typeid prefix must be at most {MAX_PREFIX_LENGTH} characters"),
            json!({ "provided_length": prefix.len() }),
        ));
    }

    if !prefix.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
        return Err(AppError::bad_request(
            "Typeid prefix can only contain lowercase letters and underscores",
            json!({ "prefix": prefix }),
        ));
    }

    if prefix.starts_with('_') || prefix.ends_with('_') {
        return Err(AppError::bad_request(
            "Typeid prefix cannot start or end with an underscore",
            json!({ "prefix": prefix }),
        ));
    }

    Ok(())
}

/// Encodes 128 bits as 26 base32 characters; the first character carries
/// the top 3 bits only.
fn encode(uuid: Uuid) -> String {
    let value = uuid.as_u128();
    (0..26)
        .map(|i| {
            let shift = 5 * (25 - i);
            char::from(ALPHABET[((value >> shift) & 0x1f) as usize])
        })
        .collect()
}
