//! Customer management service.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::CustomerDto;
use crate::domain::entities::{NewCustomer, Order, UpdateCustomer};
use crate::domain::repositories::{CustomerRepository, OrderRepository};
use crate::error::AppError;

/// Business operations behind the customer resource.
///
/// Handlers depend on this trait only, so tests can substitute a mock or a
/// hand-written stub for the whole persistence stack.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Returns every customer with its order history.
    async fn find_all(&self) -> Result<Vec<CustomerDto>, AppError>;

    /// Returns one customer with its order history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer has this id.
    async fn find_by_id(&self, id: Uuid) -> Result<CustomerDto, AppError>;

    /// Registers a new customer and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body fails validation.
    async fn insert(&self, dto: CustomerDto) -> Result<Uuid, AppError>;

    /// Replaces an existing customer and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body fails validation.
    /// Returns [`AppError::NotFound`] if no customer has this id.
    async fn update(&self, id: Uuid, dto: CustomerDto) -> Result<Uuid, AppError>;

    /// Deletes a customer and its orders.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer has this id.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

/// Repository-backed [`CustomerService`].
///
/// Ids are generated here (UUID v4); anything the client sends as `id` or
/// `orderHistory` is ignored. A missing `registration` defaults to now.
pub struct DefaultCustomerService<C: CustomerRepository, O: OrderRepository> {
    customer_repository: Arc<C>,
    order_repository: Arc<O>,
}

impl<C: CustomerRepository, O: OrderRepository> DefaultCustomerService<C, O> {
    /// Creates a new customer service.
    pub fn new(customer_repository: Arc<C>, order_repository: Arc<O>) -> Self {
        Self {
            customer_repository,
            order_repository,
        }
    }
}

fn customer_not_found(id: Uuid) -> AppError {
    AppError::not_found("Customer not found", json!({ "id": id }))
}

#[async_trait]
impl<C, O> CustomerService for DefaultCustomerService<C, O>
where
    C: CustomerRepository + 'static,
    O: OrderRepository + 'static,
{
    async fn find_all(&self) -> Result<Vec<CustomerDto>, AppError> {
        let customers = self.customer_repository.list().await?;

        let mut orders_by_customer: HashMap<Uuid, Vec<Order>> = HashMap::new();
        for order in self.order_repository.list().await? {
            orders_by_customer
                .entry(order.customer_id)
                .or_default()
                .push(order);
        }

        Ok(customers
            .into_iter()
            .map(|customer| {
                let orders = orders_by_customer.remove(&customer.id).unwrap_or_default();
                CustomerDto::from_entity(customer, orders)
            })
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<CustomerDto, AppError> {
        let customer = self
            .customer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| customer_not_found(id))?;

        let orders = self.order_repository.list_by_customer(id).await?;

        Ok(CustomerDto::from_entity(customer, orders))
    }

    async fn insert(&self, dto: CustomerDto) -> Result<Uuid, AppError> {
        dto.validate()?;

        let new_customer = NewCustomer {
            id: Uuid::new_v4(),
            name: dto.name,
            registration: dto.registration.unwrap_or_else(Utc::now),
        };

        let created = self.customer_repository.create(new_customer).await?;
        tracing::info!(customer_id = %created.id, "Customer created");

        Ok(created.id)
    }

    async fn update(&self, id: Uuid, dto: CustomerDto) -> Result<Uuid, AppError> {
        dto.validate()?;

        let update = UpdateCustomer {
            name: dto.name,
            registration: dto.registration,
        };

        let updated = self
            .customer_repository
            .update(id, update)
            .await?
            .ok_or_else(|| customer_not_found(id))?;
        tracing::info!(customer_id = %updated.id, "Customer updated");

        Ok(updated.id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.customer_repository.delete(id).await? {
            return Err(customer_not_found(id));
        }

        tracing::info!(customer_id = %id, "Customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Customer;
    use crate::domain::repositories::{MockCustomerRepository, MockOrderRepository};
    use chrono::{DateTime, TimeZone};

    fn create_test_customer(id: Uuid, name: &str) -> Customer {
        let now = Utc::now();
        Customer::new(id, Some(name.to_string()), now, now)
    }

    fn create_test_order(customer_id: Uuid, amount: i32) -> Order {
        Order {
            id: Uuid::new_v4(),
            customer_id,
            products: vec!["sku-1".to_string()],
            amount: Some(amount),
            address: None,
            created_at: Utc::now(),
        }
    }

    fn service(
        customers: MockCustomerRepository,
        orders: MockOrderRepository,
    ) -> DefaultCustomerService<MockCustomerRepository, MockOrderRepository> {
        DefaultCustomerService::new(Arc::new(customers), Arc::new(orders))
    }

    #[tokio::test]
    async fn test_insert_assigns_new_id_and_ignores_client_id() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_create()
            .withf(|new| new.name.as_deref() == Some("Frej"))
            .times(1)
            .returning(|new| Ok(new.into_customer(Utc::now())));

        let service = service(customers, MockOrderRepository::new());

        let dto = CustomerDto {
            id: Some("client-chosen".to_string()),
            ..CustomerDto::with_name("Frej")
        };
        let id = service.insert(dto).await.unwrap();

        assert_ne!(id.to_string(), "client-chosen");
    }

    #[tokio::test]
    async fn test_insert_keeps_supplied_registration() {
        let registration: DateTime<Utc> = Utc.with_ymd_and_hms(2021, 3, 14, 9, 0, 0).unwrap();

        let mut customers = MockCustomerRepository::new();
        customers
            .expect_create()
            .withf(move |new| new.registration == registration)
            .times(1)
            .returning(|new| Ok(new.into_customer(Utc::now())));

        let service = service(customers, MockOrderRepository::new());

        let dto = CustomerDto {
            registration: Some(registration),
            ..CustomerDto::with_name("Frigg")
        };

        assert!(service.insert(dto).await.is_ok());
    }

    #[tokio::test]
    async fn test_insert_invalid_name() {
        let service = service(MockCustomerRepository::new(), MockOrderRepository::new());

        let result = service.insert(CustomerDto::with_name("")).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_find_by_id_success() {
        let id = Uuid::new_v4();
        let customer = create_test_customer(id, "Frej");
        let order = create_test_order(id, 2000);

        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_by_id()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(move |_| Ok(Some(customer.clone())));

        let mut orders = MockOrderRepository::new();
        orders
            .expect_list_by_customer()
            .times(1)
            .returning(move |_| Ok(vec![order.clone()]));

        let dto = service(customers, orders).find_by_id(id).await.unwrap();

        assert_eq!(dto.id, Some(id.to_string()));
        assert_eq!(dto.name.as_deref(), Some("Frej"));
        assert_eq!(dto.order_history.unwrap()[0].amount, Some(2000));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(customers, MockOrderRepository::new())
            .find_by_id(Uuid::new_v4())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_all_groups_orders_by_customer() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let all_customers = vec![
            create_test_customer(first, "Frej"),
            create_test_customer(second, "Frigg"),
        ];
        let all_orders = vec![
            create_test_order(first, 1),
            create_test_order(first, 2),
            create_test_order(second, 3),
        ];

        let mut customers = MockCustomerRepository::new();
        customers
            .expect_list()
            .times(1)
            .returning(move || Ok(all_customers.clone()));

        let mut orders = MockOrderRepository::new();
        orders
            .expect_list()
            .times(1)
            .returning(move || Ok(all_orders.clone()));

        let list = service(customers, orders).find_all().await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].order_history.as_ref().unwrap().len(), 2);
        assert_eq!(list[1].order_history.as_ref().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let result = service(customers, MockOrderRepository::new())
            .update(Uuid::new_v4(), CustomerDto::with_name("Frigg"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_returns_same_id() {
        let id = Uuid::new_v4();

        let mut customers = MockCustomerRepository::new();
        customers
            .expect_update()
            .withf(move |candidate, update| {
                *candidate == id && update.name.as_deref() == Some("Frigg")
            })
            .times(1)
            .returning(|id, _| Ok(Some(create_test_customer(id, "Frigg"))));

        let result = service(customers, MockOrderRepository::new())
            .update(id, CustomerDto::with_name("Frigg"))
            .await;

        assert_eq!(result.unwrap(), id);
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut customers = MockCustomerRepository::new();
        customers.expect_delete().times(1).returning(|_| Ok(false));

        let result = service(customers, MockOrderRepository::new())
            .delete(Uuid::new_v4())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
