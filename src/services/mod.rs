//! Business logic services

pub mod books;
pub mod customers;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub customers: customers::CustomersService,
}

impl Services {
    /// Create all services backed by the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(Arc::new(repository.books)),
            customers: customers::CustomersService::new(Arc::new(repository.customers)),
        }
    }
}
