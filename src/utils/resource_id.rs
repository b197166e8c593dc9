//! Parsing of resource identifiers taken from request paths.

use crate::AppError;
use serde_json::json;
use uuid::Uuid;

/// Parses a path segment into a resource UUID.
///
/// Accepts any textual form understood by [`Uuid::parse_str`] (hyphenated,
/// simple, braced or URN).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the segment is not a UUID.
///
/// # Examples
///
/// ```ignore
/// let id = parse_resource_id("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
/// assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
/// ```
pub fn parse_resource_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|e| {
        AppError::bad_request(
            "Invalid resource id",
            json!({ "id": raw, "reason": e.to_string() }),
        )
    })
}
