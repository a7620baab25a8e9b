//! Customer endpoints

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::customer::{CreateCustomer, CustomerView, UpdateCustomer},
    AppState,
};

use super::{pages, CustomerId, Payload};

const CUSTOMERS_PAGE: &str = "/customers/";

/// All customers, JSON view
#[derive(Serialize, ToSchema)]
pub struct CustomerList {
    pub customers: Vec<CustomerView>,
}

#[derive(Serialize, ToSchema)]
pub struct CustomerEditData {
    pub success: bool,
    pub customer: CustomerView,
}

/// Customer route table
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customers/", get(list_customers))
        .route("/customers/json", get(list_customers_json))
        .route("/customers/create", post(create_customer))
        .route("/customers/:id/edit-data", get(get_customer_for_edit))
        .route("/customers/:id/edit", post(edit_customer))
        .route("/customers/:id/delete", post(delete_customer))
}

pub async fn list_customers(State(state): State<AppState>) -> AppResult<Html<String>> {
    let customers = state.services.customers.list().await?;
    tracing::debug!("Customers page accessed");
    Ok(Html(pages::render_customers(&customers)))
}

/// List customers as JSON
#[utoipa::path(
    get,
    path = "/customers/json",
    tag = "customers",
    responses(
        (status = 200, description = "All customers", body = CustomerList)
    )
)]
pub async fn list_customers_json(State(state): State<AppState>) -> AppResult<Json<CustomerList>> {
    let customers = state.services.customers.list().await?;
    Ok(Json(CustomerList {
        customers: customers.iter().map(CustomerView::from).collect(),
    }))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/customers/create",
    tag = "customers",
    request_body = CreateCustomer,
    responses(
        (status = 303, description = "Customer created, redirect to the customer list"),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Customer could not be stored", body = ErrorResponse)
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Payload(data): Payload<CreateCustomer>,
) -> AppResult<Redirect> {
    state.services.customers.create(data).await?;
    Ok(Redirect::to(CUSTOMERS_PAGE))
}

/// Current values of a customer, for editing
#[utoipa::path(
    get,
    path = "/customers/{id}/edit-data",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer data", body = CustomerEditData),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    )
)]
pub async fn get_customer_for_edit(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> AppResult<Json<CustomerEditData>> {
    let customer = state.services.customers.get(id).await?;
    Ok(Json(CustomerEditData {
        success: true,
        customer: CustomerView::from(&customer),
    }))
}

/// Partially update a customer
#[utoipa::path(
    post,
    path = "/customers/{id}/edit",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateCustomer,
    responses(
        (status = 303, description = "Customer updated, redirect to the customer list"),
        (status = 400, description = "Invalid field value", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Customer could not be stored", body = ErrorResponse)
    )
)]
pub async fn edit_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
    Payload(patch): Payload<UpdateCustomer>,
) -> AppResult<Redirect> {
    state.services.customers.update(id, patch).await?;
    Ok(Redirect::to(CUSTOMERS_PAGE))
}

/// Delete a customer
#[utoipa::path(
    post,
    path = "/customers/{id}/delete",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 303, description = "Customer deleted, redirect to the customer list"),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> AppResult<Redirect> {
    state.services.customers.delete(id).await?;
    Ok(Redirect::to(CUSTOMERS_PAGE))
}

#[cfg(test)]
mod tests {
    use axum::http::{header::LOCATION, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::{
        api::test_support::*,
        error::AppError,
        models::customer::{Customer, NewCustomer},
        repository::{books::MockBookStore, customers::MockCustomerStore},
    };

    fn john(id: i32) -> Customer {
        Customer {
            id,
            name: "John Doe".to_string(),
            city: "New York".to_string(),
            age: 30,
        }
    }

    #[tokio::test]
    async fn test_create_from_form() {
        let mut store = MockCustomerStore::new();
        store
            .expect_create()
            .withf(|c: &NewCustomer| c.name == "John Doe" && c.city == "New York" && c.age == 30)
            .times(1)
            .returning(|_| Ok(john(1)));

        let response = app(MockBookStore::new(), store)
            .oneshot(post_form(
                "/customers/create",
                "name=John+Doe&city=New+York&age=30",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/customers/");
    }

    #[tokio::test]
    async fn test_create_missing_field() {
        let mut store = MockCustomerStore::new();
        store.expect_create().never();

        let response = app(MockBookStore::new(), store)
            .oneshot(post_form("/customers/create", "name=John+Doe&city=New+York"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid form data"));
    }

    #[tokio::test]
    async fn test_create_injection_rejected() {
        let mut store = MockCustomerStore::new();
        store.expect_create().never();

        let response = app(MockBookStore::new(), store)
            .oneshot(post_json(
                "/customers/create",
                json!({"name": "Robert'); DROP TABLE customers;--", "city": "HackerTown", "age": 30}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Customer name must only contain letters and spaces"})
        );
    }

    #[tokio::test]
    async fn test_list_json() {
        let mut store = MockCustomerStore::new();
        store.expect_list().returning(|| Ok(vec![john(1)]));

        let response = app(MockBookStore::new(), store)
            .oneshot(get("/customers/json"))
            .await
            .unwrap();
        assert_eq!(
            body_json(response).await,
            json!({"customers": [{"name": "John Doe", "city": "New York", "age": 30}]})
        );
    }

    #[tokio::test]
    async fn test_edit_data() {
        let mut store = MockCustomerStore::new();
        store.expect_get_by_id().returning(|id| Ok(john(id)));

        let response = app(MockBookStore::new(), store)
            .oneshot(get("/customers/1/edit-data"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "customer": {"name": "John Doe", "city": "New York", "age": 30}})
        );
    }

    #[tokio::test]
    async fn test_partial_edit_redirects() {
        let mut store = MockCustomerStore::new();
        store.expect_get_by_id().returning(|id| Ok(john(id)));
        store
            .expect_update()
            .withf(|c: &Customer| c.name == "John Doe" && c.age == 31)
            .times(1)
            .returning(|c| Ok(c.clone()));

        let response = app(MockBookStore::new(), store)
            .oneshot(post_form("/customers/1/edit", "age=31"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_edit_invalid_age() {
        let mut store = MockCustomerStore::new();
        store.expect_get_by_id().returning(|id| Ok(john(id)));
        store.expect_update().never();

        let response = app(MockBookStore::new(), store)
            .oneshot(post_form("/customers/1/edit", "age=200"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_missing_customer() {
        let mut store = MockCustomerStore::new();
        store
            .expect_get_by_id()
            .returning(|_| Err(AppError::NotFound("Customer not found".to_string())));
        store.expect_delete().never();

        let response = app(MockBookStore::new(), store)
            .oneshot(post_form("/customers/8/delete", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Customer not found"}));
    }

    #[tokio::test]
    async fn test_unparseable_id_is_json_not_found() {
        let mut store = MockCustomerStore::new();
        store.expect_get_by_id().never();
        store.expect_delete().never();

        let response = app(MockBookStore::new(), store)
            .oneshot(post_form("/customers/seven/delete", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Customer not found"}));
    }
}
