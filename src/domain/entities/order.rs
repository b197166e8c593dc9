//! Order entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Address;

/// An order owned by exactly one customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub products: Vec<String>,
    pub amount: Option<i32>,
    pub address: Option<Address>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new order under an existing customer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub products: Vec<String>,
    pub amount: Option<i32>,
    pub address: Option<Address>,
}

impl NewOrder {
    /// Materializes the order as it is stored, stamped with `created_at`.
    pub fn into_order(self, created_at: DateTime<Utc>) -> Order {
        Order {
            id: self.id,
            customer_id: self.customer_id,
            products: self.products,
            amount: self.amount,
            address: self.address,
            created_at,
        }
    }
}
