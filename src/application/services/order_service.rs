//! Order management service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::OrderDto;
use crate::domain::entities::NewOrder;
use crate::domain::repositories::{CustomerRepository, OrderRepository};
use crate::error::AppError;

/// Business operations behind the order resource.
///
/// There is deliberately no update operation: orders are created and
/// deleted, never modified.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Returns every order.
    async fn find_all(&self) -> Result<Vec<OrderDto>, AppError>;

    /// Returns one order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no order has this id.
    async fn find_by_id(&self, id: Uuid) -> Result<OrderDto, AppError>;

    /// Places a new order for `customer_id` and returns the assigned order id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body fails validation.
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    async fn insert(&self, customer_id: Uuid, dto: OrderDto) -> Result<Uuid, AppError>;

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no order has this id.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

/// Repository-backed [`OrderService`].
pub struct DefaultOrderService<O: OrderRepository, C: CustomerRepository> {
    order_repository: Arc<O>,
    customer_repository: Arc<C>,
}

impl<O: OrderRepository, C: CustomerRepository> DefaultOrderService<O, C> {
    /// Creates a new order service.
    pub fn new(order_repository: Arc<O>, customer_repository: Arc<C>) -> Self {
        Self {
            order_repository,
            customer_repository,
        }
    }
}

fn order_not_found(id: Uuid) -> AppError {
    AppError::not_found("Order not found", json!({ "id": id }))
}

#[async_trait]
impl<O, C> OrderService for DefaultOrderService<O, C>
where
    O: OrderRepository + 'static,
    C: CustomerRepository + 'static,
{
    async fn find_all(&self) -> Result<Vec<OrderDto>, AppError> {
        let orders = self.order_repository.list().await?;
        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<OrderDto, AppError> {
        self.order_repository
            .find_by_id(id)
            .await?
            .map(OrderDto::from)
            .ok_or_else(|| order_not_found(id))
    }

    async fn insert(&self, customer_id: Uuid, dto: OrderDto) -> Result<Uuid, AppError> {
        dto.validate()?;

        if self
            .customer_repository
            .find_by_id(customer_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(
                "Customer not found",
                json!({ "id": customer_id }),
            ));
        }

        let new_order = NewOrder {
            id: Uuid::new_v4(),
            customer_id,
            products: dto.products.unwrap_or_default(),
            amount: dto.amount,
            address: dto.address,
        };

        let created = self.order_repository.create(new_order).await?;
        tracing::info!(order_id = %created.id, %customer_id, "Order created");

        Ok(created.id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.order_repository.delete(id).await? {
            return Err(order_not_found(id));
        }

        tracing::info!(order_id = %id, "Order deleted");
        Ok(())
    }
}
