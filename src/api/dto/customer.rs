//! DTOs for the customer resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::order::OrderDto;
use crate::domain::entities::{Customer, Order};

/// Request and response body of the customer resource.
///
/// Every field is nullable. Absent values are serialized as explicit `null`,
/// so an empty DTO renders as
/// `{"id":null,"name":null,"registration":null,"orderHistory":null}`.
///
/// On input, `id` and `orderHistory` are ignored: ids are assigned by the
/// service and orders are created through the order resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    pub registration: Option<DateTime<Utc>>,

    pub order_history: Option<Vec<OrderDto>>,
}

impl CustomerDto {
    /// Builds the response representation of a customer and its orders.
    pub fn from_entity(customer: Customer, orders: Vec<Order>) -> Self {
        Self {
            id: Some(customer.id.to_string()),
            name: customer.name,
            registration: Some(customer.registration),
            order_history: Some(orders.into_iter().map(OrderDto::from).collect()),
        }
    }

    /// Convenience constructor used to build request bodies.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
