//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, customers, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shelfkeeper API",
        version = "0.3.0",
        description = "Book and customer management JSON API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books_json,
        books::create_book,
        books::get_book_for_edit,
        books::edit_book,
        books::delete_book,
        books::get_book_details,
        // Customers
        customers::list_customers_json,
        customers::create_customer,
        customers::get_customer_for_edit,
        customers::edit_customer,
        customers::delete_customer,
    ),
    components(
        schemas(
            // Books
            crate::models::book::BookView,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            books::BookList,
            books::BookEditData,
            books::BookDetails,
            books::MessageResponse,
            // Customers
            crate::models::customer::CustomerView,
            crate::models::customer::CreateCustomer,
            crate::models::customer::UpdateCustomer,
            customers::CustomerList,
            customers::CustomerEditData,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book management"),
        (name = "customers", description = "Customer management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
