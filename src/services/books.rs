//! Books service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, NewBook, UpdateBook},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    /// Get a book by id
    pub async fn get(&self, id: i32) -> AppResult<Book> {
        self.store.get_by_id(id).await.map_err(|e| {
            if let AppError::NotFound(_) = e {
                tracing::warn!("Book {} not found", id);
            }
            e
        })
    }

    /// Get a book by its exact name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Book> {
        self.store.get_by_name(name).await.map_err(|e| {
            if let AppError::NotFound(_) = e {
                tracing::warn!("Book named {:?} not found", name);
            }
            e
        })
    }

    /// Sanitize, validate and store a new book
    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let book = NewBook::try_from(data)?;

        let created = self
            .store
            .create(&book)
            .await
            .map_err(|e| AppError::persistence("Error creating book", e))?;

        tracing::info!("Book added: id={} name={:?}", created.id, created.name);
        Ok(created)
    }

    /// Apply a partial update to an existing book
    pub async fn update(&self, id: i32, patch: UpdateBook) -> AppResult<Book> {
        let current = self.get(id).await?;
        let book = current.updated(patch)?;

        let updated = self
            .store
            .update(&book)
            .await
            .map_err(|e| AppError::persistence("Error updating book", e))?;

        tracing::info!("Book edited: id={}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get(id).await?;

        self.store
            .delete(id)
            .await
            .map_err(|e| AppError::persistence("Error deleting book", e))?;

        tracing::info!("Book deleted: id={}", id);
        Ok(())
    }
}
