//! Handlers for the customer resource.
//!
//! Each handler parses path and body, calls [`CustomerService`] once and maps
//! the outcome to a status code and headers. Errors from the service are
//! returned unchanged.
//!
//! [`CustomerService`]: crate::application::services::CustomerService

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};

use crate::api::dto::CustomerDto;
use crate::api::routes::CUSTOMER_PATH;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::resource_id::parse_resource_id;

/// Lists all customers.
///
/// # Endpoint
///
/// `GET /api/v1/customer`
pub async fn find_all_customers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerDto>>, AppError> {
    let customers = state.customer_service.find_all().await?;
    Ok(Json(customers))
}

/// Returns a single customer.
///
/// # Endpoint
///
/// `GET /api/v1/customer/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not a UUID.
/// Returns 404 if the customer does not exist.
pub async fn find_customer_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CustomerDto>, AppError> {
    let id = parse_resource_id(&id)?;
    let customer = state.customer_service.find_by_id(id).await?;
    Ok(Json(customer))
}

/// Registers a new customer.
///
/// # Endpoint
///
/// `POST /api/v1/customer`
///
/// # Response
///
/// `201 Created` with `Location: /api/v1/customer/{id}`, where `id` is
/// assigned by the service. Any `id` in the body is ignored.
pub async fn insert_customer_handler(
    State(state): State<AppState>,
    Json(payload): Json<CustomerDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1]), AppError> {
    let id = state.customer_service.insert(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{CUSTOMER_PATH}/{id}"))],
    ))
}

/// Replaces an existing customer.
///
/// # Endpoint
///
/// `PUT /api/v1/customer/{id}`
///
/// # Response
///
/// `204 No Content` with `Content-Location: /api/v1/customer/{id}`, where
/// `{id}` is the path segment exactly as sent.
///
/// # Errors
///
/// Returns 400 if `id` is not a UUID or the body is invalid.
/// Returns 404 if the customer does not exist.
pub async fn update_customer_handler(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CustomerDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1]), AppError> {
    let id = parse_resource_id(&raw_id)?;
    state.customer_service.update(id, payload).await?;

    Ok((
        StatusCode::NO_CONTENT,
        [(header::CONTENT_LOCATION, format!("{CUSTOMER_PATH}/{raw_id}"))],
    ))
}

/// Deletes a customer and its orders.
///
/// # Endpoint
///
/// `DELETE /api/v1/customer/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not a UUID.
/// Returns 404 if the customer does not exist.
pub async fn delete_customer_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_resource_id(&id)?;
    state.customer_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::v1_routes;
    use crate::application::services::{MockCustomerService, MockOrderService};
    use crate::infrastructure::persistence::MemoryStore;
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::Arc;
    use uuid::Uuid;

    fn make_server(service: MockCustomerService) -> TestServer {
        let state = AppState::new(
            Arc::new(service),
            Arc::new(MockOrderService::new()),
            Arc::new(MemoryStore::new()),
        );
        TestServer::new(v1_routes().with_state(state)).unwrap()
    }

    #[tokio::test]
    async fn test_find_all() {
        let mut service = MockCustomerService::new();
        service
            .expect_find_all()
            .times(1)
            .returning(|| Ok(vec![CustomerDto::default()]));

        let response = make_server(service)
            .get("/api/v1/customer")
            .add_header(header::ACCEPT, "application/json")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(header::CONTENT_TYPE), "application/json");
        let body = response.json::<serde_json::Value>();
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let mut service = MockCustomerService::new();
        service.expect_find_all().times(1).returning(|| Ok(vec![]));

        let response = make_server(service).get("/api/v1/customer").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let id = Uuid::new_v4();
        let mut service = MockCustomerService::new();
        service
            .expect_find_by_id()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(|_| Ok(CustomerDto::default()));

        let response = make_server(service)
            .get(&format!("/api/v1/customer/{id}"))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "id": null,
            "name": null,
            "registration": null,
            "orderHistory": null
        }));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let mut service = MockCustomerService::new();
        service.expect_find_by_id().times(1).returning(|id| {
            Err(AppError::not_found(
                "Customer not found",
                json!({ "id": id }),
            ))
        });

        let response = make_server(service)
            .get(&format!("/api/v1/customer/{}", Uuid::new_v4()))
            .await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "not_found"
        );
    }

    #[tokio::test]
    async fn test_find_by_id_invalid_uuid() {
        let response = make_server(MockCustomerService::new())
            .get("/api/v1/customer/not-a-uuid")
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_insert_new_customer() {
        let id = Uuid::new_v4();
        let mut service = MockCustomerService::new();
        service
            .expect_insert()
            .withf(|dto| *dto == CustomerDto::with_name("Frej"))
            .times(1)
            .returning(move |_| Ok(id));

        let response = make_server(service)
            .post("/api/v1/customer")
            .json(&json!({ "name": "Frej" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(
            response.header(header::LOCATION),
            format!("/api/v1/customer/{id}")
        );
    }

    #[tokio::test]
    async fn test_insert_validation_error_is_propagated() {
        let mut service = MockCustomerService::new();
        service.expect_insert().times(1).returning(|_| {
            Err(AppError::bad_request("Validation failed", json!({})))
        });

        let response = make_server(service)
            .post("/api/v1/customer")
            .json(&json!({ "name": "" }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_update_customer() {
        let id = Uuid::new_v4();
        let mut service = MockCustomerService::new();
        service
            .expect_update()
            .withf(move |candidate, dto| {
                *candidate == id && *dto == CustomerDto::with_name("Frigg")
            })
            .times(1)
            .returning(|id, _| Ok(id));

        let response = make_server(service)
            .put(&format!("/api/v1/customer/{id}"))
            .json(&json!({ "name": "Frigg" }))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert_eq!(
            response.header(header::CONTENT_LOCATION),
            format!("/api/v1/customer/{id}")
        );
    }

    #[tokio::test]
    async fn test_update_echoes_path_segment() {
        let id = Uuid::new_v4();
        let mut service = MockCustomerService::new();
        service
            .expect_update()
            .withf(move |candidate, _| *candidate == id)
            .times(1)
            .returning(|id, _| Ok(id));

        let simple = id.simple().to_string();
        let response = make_server(service)
            .put(&format!("/api/v1/customer/{simple}"))
            .json(&json!({ "name": "Frigg" }))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert_eq!(
            response.header(header::CONTENT_LOCATION),
            format!("/api/v1/customer/{simple}")
        );
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let id = Uuid::new_v4();
        let mut service = MockCustomerService::new();
        service
            .expect_delete()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(|_| Ok(()));

        let response = make_server(service)
            .delete(&format!("/api/v1/customer/{id}"))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.as_bytes().is_empty());
    }
}
