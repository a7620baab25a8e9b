//! Data models for Shelfkeeper

pub mod book;
pub mod customer;
pub mod input;

// Re-export commonly used types
pub use book::{Book, BookView, CreateBook, NewBook, UpdateBook};
pub use customer::{CreateCustomer, Customer, CustomerView, NewCustomer, UpdateCustomer};
pub use input::{IntegerError, IntegerInput};
