#![allow(dead_code)]

use axum_test::TestServer;
use customer_order_service::domain::entities::NewCustomer;
use customer_order_service::domain::repositories::CustomerRepository;
use customer_order_service::infrastructure::persistence::{
    PgCustomerRepository, PgOrderRepository, PgStorageHealth,
};
use customer_order_service::routes::api_router;
use customer_order_service::server::{build_state, in_memory_state};
use customer_order_service::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Test server over a fresh in-memory store.
pub fn memory_server() -> TestServer {
    server_for(in_memory_state())
}

pub fn server_for(state: AppState) -> TestServer {
    TestServer::new(api_router(state)).unwrap()
}

pub fn pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    build_state(
        Arc::new(PgCustomerRepository::new(pool.clone())),
        Arc::new(PgOrderRepository::new(pool.clone())),
        Arc::new(PgStorageHealth::new(pool)),
    )
}

pub async fn insert_customer(pool: &PgPool, name: &str) -> Uuid {
    let repo = PgCustomerRepository::new(Arc::new(pool.clone()));

    repo.create(NewCustomer {
        id: Uuid::new_v4(),
        name: Some(name.to_string()),
        registration: chrono::Utc::now(),
    })
    .await
    .unwrap()
    .id
}

/// Posts a customer and returns the path from its `Location` header.
pub async fn create_customer(server: &TestServer, name: &str) -> String {
    let response = server
        .post("/api/v1/customer")
        .json(&json!({ "name": name }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    location(&response)
}

pub fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .unwrap()
        .to_string()
}

/// Last path segment of a resource location.
pub fn id_of(location: &str) -> String {
    location.rsplit('/').next().unwrap().to_string()
}

pub fn order_body() -> Value {
    json!({
        "products": ["sku-1"],
        "amount": 2000,
        "address": { "street": "Storgatan 1", "city": "Lund", "postalCode": "22100", "country": "SE" }
    })
}
