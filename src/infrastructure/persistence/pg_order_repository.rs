//! PostgreSQL implementation of order repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Address, NewOrder, Order};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct OrderRow {
    id: Uuid,
    customer_id: Uuid,
    products: Json<Vec<String>>,
    amount: Option<i32>,
    address: Option<Json<Address>>,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(r: OrderRow) -> Self {
        Order {
            id: r.id,
            customer_id: r.customer_id,
            products: r.products.0,
            amount: r.amount,
            address: r.address.map(|a| a.0),
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL repository for orders.
///
/// `products` and `address` are stored as JSONB documents. Inserting an order
/// for an unknown customer violates the foreign key, which [`AppError`]
/// reports as not found.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (id, customer_id, products, amount, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, customer_id, products, amount, address, created_at
            "#,
        )
        .bind(new_order.id)
        .bind(new_order.customer_id)
        .bind(Json(new_order.products))
        .bind(new_order.amount)
        .bind(new_order.address.map(Json))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_id, products, amount, address, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Order::from))
    }

    async fn list(&self) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_id, products, amount, address, created_at
            FROM orders
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_id, products, amount, address, created_at
            FROM orders
            WHERE customer_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
