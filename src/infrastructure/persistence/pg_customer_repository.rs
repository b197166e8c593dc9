//! PostgreSQL implementation of customer repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct CustomerRow {
    id: Uuid,
    name: Option<String>,
    registration: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(r: CustomerRow) -> Self {
        Customer::new(r.id, r.name, r.registration, r.created_at)
    }
}

/// PostgreSQL repository for customers.
///
/// Deleting a customer removes its orders through the
/// `ON DELETE CASCADE` foreign key on `orders.customer_id`.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (id, name, registration)
            VALUES ($1, $2, $3)
            RETURNING id, name, registration, created_at
            "#,
        )
        .bind(new_customer.id)
        .bind(new_customer.name)
        .bind(new_customer.registration)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, registration, created_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, registration, created_at
            FROM customers
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        update: UpdateCustomer,
    ) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers SET
                name         = $2,
                registration = COALESCE($3, registration)
            WHERE id = $1
            RETURNING id, name, registration, created_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.registration)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
