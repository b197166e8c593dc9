//! Process-local repository implementations.
//!
//! Used when no database is configured, and by integration tests that
//! exercise the full HTTP stack without PostgreSQL. Records are kept in
//! insertion order, which is also their creation order.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Customer, NewCustomer, NewOrder, Order, UpdateCustomer};
use crate::domain::repositories::{CustomerRepository, OrderRepository, StorageHealth};
use crate::error::AppError;

#[derive(Default)]
struct Tables {
    customers: Vec<Customer>,
    orders: Vec<Order>,
}

/// Shared backing store for the in-memory repositories.
///
/// Customers and orders live behind one lock so that deleting a customer
/// and its orders is a single atomic step.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        tracing::debug!("Using in-memory storage");
        Self::default()
    }
}

#[async_trait]
impl StorageHealth for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// In-memory [`CustomerRepository`].
pub struct InMemoryCustomerRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryCustomerRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let mut tables = self.store.tables.write().await;

        if tables.customers.iter().any(|c| c.id == new_customer.id) {
            return Err(AppError::conflict(
                "Customer already exists",
                json!({ "id": new_customer.id }),
            ));
        }

        let customer = new_customer.into_customer(Utc::now());
        tables.customers.push(customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let tables = self.store.tables.read().await;
        Ok(tables.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.store.tables.read().await.customers.clone())
    }

    async fn update(
        &self,
        id: Uuid,
        update: UpdateCustomer,
    ) -> Result<Option<Customer>, AppError> {
        let mut tables = self.store.tables.write().await;

        let Some(customer) = tables.customers.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        customer.name = update.name;
        if let Some(registration) = update.registration {
            customer.registration = registration;
        }

        Ok(Some(customer.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tables = self.store.tables.write().await;

        let before = tables.customers.len();
        tables.customers.retain(|c| c.id != id);
        if tables.customers.len() == before {
            return Ok(false);
        }

        tables.orders.retain(|o| o.customer_id != id);
        Ok(true)
    }
}

/// In-memory [`OrderRepository`].
pub struct InMemoryOrderRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryOrderRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let mut tables = self.store.tables.write().await;

        if !tables.customers.iter().any(|c| c.id == new_order.customer_id) {
            return Err(AppError::not_found(
                "Customer not found",
                json!({ "id": new_order.customer_id }),
            ));
        }

        if tables.orders.iter().any(|o| o.id == new_order.id) {
            return Err(AppError::conflict(
                "Order already exists",
                json!({ "id": new_order.id }),
            ));
        }

        let order = new_order.into_order(Utc::now());
        tables.orders.push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError> {
        let tables = self.store.tables.read().await;
        Ok(tables.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.store.tables.read().await.orders.clone())
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<Order>, AppError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .orders
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tables = self.store.tables.write().await;

        let before = tables.orders.len();
        tables.orders.retain(|o| o.id != id);
        Ok(tables.orders.len() != before)
    }
}
