//! Repository layer for database operations

pub mod books;
pub mod customers;

pub use books::{BookStore, BooksRepository};
pub use customers::{CustomerStore, CustomersRepository};

use sqlx::{Pool, Postgres};

/// Main repository struct holding one store per table
#[derive(Clone)]
pub struct Repository {
    pub books: BooksRepository,
    pub customers: CustomersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: BooksRepository::new(pool.clone()),
            customers: CustomersRepository::new(pool),
        }
    }
}
