//! HTTP handlers and route tables

pub mod books;
pub mod customers;
pub mod health;
pub mod openapi;
pub mod pages;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    routing::get,
    Form, Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Request body accepted either as JSON or as an urlencoded HTML form.
///
/// The `Content-Type` header picks the decoder; anything that is not JSON is
/// treated as form data.
pub struct Payload<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|ct| ct.trim_start().starts_with("application/json"))
        .unwrap_or(false)
}

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(format!("Invalid JSON data: {}", e.body_text())))?;
            Ok(Payload(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(format!("Invalid form data: {}", e.body_text())))?;
            Ok(Payload(value))
        }
    }
}

/// Declares a numeric path id extractor for one entity. An id that does not
/// parse as `i32` cannot name a stored row, so it is reported as not found.
macro_rules! id_path {
    ($name:ident, $not_found:literal) => {
        pub struct $name(pub i32);

        #[async_trait]
        impl<S> FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = AppError;

            async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
                let Path(id) = Path::<i32>::from_request_parts(parts, state)
                    .await
                    .map_err(|e| {
                        tracing::warn!("Rejected path id: {}", e.body_text());
                        AppError::NotFound($not_found.to_string())
                    })?;
                Ok($name(id))
            }
        }
    };
}

id_path!(BookId, "Book not found");
id_path!(CustomerId, "Customer not found");

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health::health_check))
        .merge(books::routes())
        .merge(customers::routes())
        .with_state(state);

    Router::new()
        .merge(app)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
