//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, NewBook},
};

/// Persistent table of books keyed by id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, oldest first
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get_by_id(&self, id: i32) -> AppResult<Book>;

    async fn get_by_name(&self, name: &str) -> AppResult<Book>;

    async fn create(&self, book: &NewBook) -> AppResult<Book>;

    /// Overwrite every column of an existing book
    async fn update(&self, book: &Book) -> AppResult<Book>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn book_not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(book_not_found)
    }

    async fn get_by_name(&self, name: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE name = $1 ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(book_not_found)
    }

    async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (name, author, year_published, book_type, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&book.name)
        .bind(&book.author)
        .bind(book.year_published)
        .bind(&book.book_type)
        .bind(&book.status)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET name = $1, author = $2, year_published = $3, book_type = $4, status = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&book.name)
        .bind(&book.author)
        .bind(book.year_published)
        .bind(&book.book_type)
        .bind(&book.status)
        .bind(book.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(book_not_found)?;

        tx.commit().await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(book_not_found());
        }

        tx.commit().await?;
        Ok(())
    }
}
