//! Customer entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered customer.
///
/// The identifier is assigned by the service layer on creation and never
/// taken from client input.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub name: Option<String>,
    pub registration: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new Customer instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let customer = Customer::new(Uuid::new_v4(), Some("Frej".to_string()), Utc::now(), Utc::now());
    /// ```
    pub fn new(
        id: Uuid,
        name: Option<String>,
        registration: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            registration,
            created_at,
        }
    }
}

/// Input data for creating a new customer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub id: Uuid,
    pub name: Option<String>,
    pub registration: DateTime<Utc>,
}

impl NewCustomer {
    /// Materializes the customer as it is stored, stamped with `created_at`.
    pub fn into_customer(self, created_at: DateTime<Utc>) -> Customer {
        Customer::new(self.id, self.name, self.registration, created_at)
    }
}

/// Replacement values for an existing customer.
///
/// `name` is always replaced (a `None` clears it). `registration` is only
/// replaced when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub registration: Option<DateTime<Utc>>,
}
