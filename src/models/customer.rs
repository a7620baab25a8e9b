//! Customer model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::IntegerInput;
use crate::{error::AppResult, sanitize::strip_tags, validation::check_customer};

/// Customer record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub age: i32,
}

/// Customer fields exposed by the JSON endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerView {
    pub name: String,
    pub city: String,
    pub age: i32,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            city: customer.city.clone(),
            age: customer.age,
        }
    }
}

/// Create customer request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCustomer {
    pub name: String,
    pub city: String,
    #[schema(value_type = Object)]
    pub age: IntegerInput,
}

/// Update customer request; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub city: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub age: Option<IntegerInput>,
}

/// Sanitized and validated customer, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub city: String,
    pub age: i32,
}

impl TryFrom<CreateCustomer> for NewCustomer {
    type Error = crate::error::AppError;

    fn try_from(data: CreateCustomer) -> AppResult<Self> {
        let name = strip_tags(&data.name);
        let city = strip_tags(&data.city);
        let age = check_customer(&name, &city, &data.age)?;
        Ok(Self { name, city, age })
    }
}

impl Customer {
    /// Merge `patch` over this customer, then sanitize and re-check the result.
    pub fn updated(&self, patch: UpdateCustomer) -> AppResult<Customer> {
        let name = strip_tags(patch.name.as_deref().unwrap_or(&self.name));
        let city = strip_tags(patch.city.as_deref().unwrap_or(&self.city));
        let age = patch
            .age
            .unwrap_or_else(|| IntegerInput::Int(i64::from(self.age)));
        let age = check_customer(&name, &city, &age)?;

        Ok(Customer {
            id: self.id,
            name,
            city,
            age,
        })
    }
}
