//! DTOs for the order resource.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Address, Order};

/// Request and response body of the order resource.
///
/// Every field is nullable and serialized as explicit `null` when absent.
/// A client-supplied `id` is ignored on creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderDto {
    pub id: Option<String>,

    pub products: Option<Vec<String>>,

    #[validate(range(min = 0, message = "Amount must not be negative"))]
    pub amount: Option<i32>,

    pub address: Option<Address>,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        Self {
            id: Some(order.id.to_string()),
            products: Some(order.products),
            amount: order.amount,
            address: order.address,
        }
    }
}
