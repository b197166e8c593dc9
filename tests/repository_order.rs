//! PostgreSQL order repository tests. Require `DATABASE_URL`.

mod common;

use customer_order_service::AppError;
use customer_order_service::domain::entities::{Address, NewOrder};
use customer_order_service::domain::repositories::OrderRepository;
use customer_order_service::infrastructure::persistence::PgOrderRepository;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn new_order(customer_id: Uuid, amount: i32) -> NewOrder {
    NewOrder {
        id: Uuid::new_v4(),
        customer_id,
        products: vec!["sku-1".to_string(), "sku-2".to_string()],
        amount: Some(amount),
        address: Some(Address {
            street: Some("Storgatan 1".to_string()),
            city: Some("Lund".to_string()),
            postal_code: None,
            country: Some("SE".to_string()),
        }),
    }
}

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let customer_id = common::insert_customer(&pool, "Frej").await;
    let repo = PgOrderRepository::new(Arc::new(pool));
    let order = new_order(customer_id, 2000);
    let id = order.id;

    repo.create(order).await.unwrap();

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.customer_id, customer_id);
    assert_eq!(found.products, vec!["sku-1", "sku-2"]);
    assert_eq!(found.amount, Some(2000));
    assert_eq!(
        found.address.and_then(|a| a.city).as_deref(),
        Some("Lund")
    );
}

#[sqlx::test]
async fn test_create_for_unknown_customer(pool: PgPool) {
    let repo = PgOrderRepository::new(Arc::new(pool));

    let result = repo.create(new_order(Uuid::new_v4(), 1)).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_list_by_customer_in_creation_order(pool: PgPool) {
    let frej = common::insert_customer(&pool, "Frej").await;
    let frigg = common::insert_customer(&pool, "Frigg").await;
    let repo = PgOrderRepository::new(Arc::new(pool));

    repo.create(new_order(frej, 1)).await.unwrap();
    repo.create(new_order(frigg, 2)).await.unwrap();
    repo.create(new_order(frej, 3)).await.unwrap();

    let amounts: Vec<_> = repo
        .list_by_customer(frej)
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.amount)
        .collect();

    assert_eq!(amounts, vec![Some(1), Some(3)]);
    assert_eq!(repo.list().await.unwrap().len(), 3);
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let customer_id = common::insert_customer(&pool, "Frej").await;
    let repo = PgOrderRepository::new(Arc::new(pool));
    let order = repo.create(new_order(customer_id, 1)).await.unwrap();

    assert!(repo.delete(order.id).await.unwrap());
    assert!(repo.find_by_id(order.id).await.unwrap().is_none());
    assert!(!repo.delete(order.id).await.unwrap());
}
