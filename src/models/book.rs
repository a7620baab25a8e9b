//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::IntegerInput;
use crate::{error::AppResult, sanitize::strip_tags, validation::check_book};

/// Status given to every newly created book
pub const DEFAULT_STATUS: &str = "available";

/// Book record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    /// Title, unique across the catalog
    pub name: String,
    pub author: String,
    pub year_published: i32,
    /// Free-text genre or format ("Fiction", "Paperback", ...)
    pub book_type: String,
    pub status: String,
}

/// Book fields exposed by the JSON endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookView {
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: String,
}

impl From<&Book> for BookView {
    fn from(book: &Book) -> Self {
        Self {
            name: book.name.clone(),
            author: book.author.clone(),
            year_published: book.year_published,
            book_type: book.book_type.clone(),
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub name: String,
    pub author: String,
    /// Integer, or a string holding one
    #[schema(value_type = Object)]
    pub year_published: IntegerInput,
    #[serde(default)]
    pub book_type: String,
}

/// Update book request; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub name: Option<String>,
    pub author: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub year_published: Option<IntegerInput>,
    pub book_type: Option<String>,
}

/// Sanitized and validated book, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: String,
    pub status: String,
}

impl TryFrom<CreateBook> for NewBook {
    type Error = crate::error::AppError;

    fn try_from(data: CreateBook) -> AppResult<Self> {
        let name = strip_tags(&data.name);
        let author = strip_tags(&data.author);
        let book_type = strip_tags(&data.book_type);
        let year_published = check_book(&name, &author, &data.year_published)?;

        Ok(Self {
            name,
            author,
            year_published,
            book_type,
            status: DEFAULT_STATUS.to_string(),
        })
    }
}

impl Book {
    /// Merge `patch` over this book, then sanitize and re-check the result.
    pub fn updated(&self, patch: UpdateBook) -> AppResult<Book> {
        let name = strip_tags(patch.name.as_deref().unwrap_or(&self.name));
        let author = strip_tags(patch.author.as_deref().unwrap_or(&self.author));
        let book_type = strip_tags(patch.book_type.as_deref().unwrap_or(&self.book_type));
        let year = patch
            .year_published
            .unwrap_or_else(|| IntegerInput::Int(i64::from(self.year_published)));
        let year_published = check_book(&name, &author, &year)?;

        Ok(Book {
            id: self.id,
            name,
            author,
            year_published,
            book_type,
            status: self.status.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn dune() -> Book {
        Book {
            id: 1,
            name: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year_published: 1965,
            book_type: "Fiction".to_string(),
            status: DEFAULT_STATUS.to_string(),
        }
    }

    #[test]
    fn test_new_book_is_sanitized() {
        let book = NewBook::try_from(CreateBook {
            name: "<b>Dune</b>".to_string(),
            author: "Frank Herbert".to_string(),
            year_published: "1965".into(),
            book_type: "<i>Fiction</i>".to_string(),
        })
        .unwrap();
        assert_eq!(book.name, "Dune");
        assert_eq!(book.book_type, "Fiction");
        assert_eq!(book.year_published, 1965);
        assert_eq!(book.status, "available");
    }

    #[test]
    fn test_new_book_rejects_script_name() {
        let err = NewBook::try_from(CreateBook {
            name: "<script>alert('XSS')</script>".to_string(),
            author: "Frank Herbert".to_string(),
            year_published: 1965.into(),
            book_type: String::new(),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let updated = dune()
            .updated(UpdateBook {
                book_type: Some("Science Fiction".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.name, "Dune");
        assert_eq!(updated.author, "Frank Herbert");
        assert_eq!(updated.year_published, 1965);
        assert_eq!(updated.book_type, "Science Fiction");
        assert_eq!(updated.status, "available");
    }

    #[test]
    fn test_update_revalidates() {
        let err = dune()
            .updated(UpdateBook {
                year_published: Some(3000.into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("between")));
    }

    #[test]
    fn test_view_hides_id_and_status() {
        let json = serde_json::to_value(BookView::from(&dune())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Dune",
                "author": "Frank Herbert",
                "year_published": 1965,
                "book_type": "Fiction"
            })
        );
    }
}
