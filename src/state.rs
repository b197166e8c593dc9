//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CustomerService, OrderService};
use crate::domain::repositories::StorageHealth;

/// Services and probes shared by all request handlers.
///
/// Everything is behind an `Arc<dyn ...>`, so cloning the state per request
/// is cheap and tests can inject any implementation of the service traits.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<dyn CustomerService>,
    pub order_service: Arc<dyn OrderService>,
    pub storage: Arc<dyn StorageHealth>,
}

impl AppState {
    pub fn new(
        customer_service: Arc<dyn CustomerService>,
        order_service: Arc<dyn OrderService>,
        storage: Arc<dyn StorageHealth>,
    ) -> Self {
        Self {
            customer_service,
            order_service,
            storage,
        }
    }
}
