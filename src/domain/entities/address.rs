//! Delivery address value object.

use serde::{Deserialize, Serialize};

/// Postal address attached to an order.
///
/// Has no identity of its own and is stored inline with the order. Every
/// field is optional; an empty address serializes as an object of `null`s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}
