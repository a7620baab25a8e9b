//! Customers repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::customer::{Customer, NewCustomer},
};

/// Persistent table of customers keyed by id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Customer>>;

    async fn get_by_id(&self, id: i32) -> AppResult<Customer>;

    async fn create(&self, customer: &NewCustomer) -> AppResult<Customer>;

    async fn update(&self, customer: &Customer) -> AppResult<Customer>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn customer_not_found() -> AppError {
    AppError::NotFound("Customer not found".to_string())
}

#[async_trait]
impl CustomerStore for CustomersRepository {
    async fn list(&self) -> AppResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(customer_not_found)
    }

    async fn create(&self, customer: &NewCustomer) -> AppResult<Customer> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (name, city, age) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&customer.name)
        .bind(&customer.city)
        .bind(customer.age)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn update(&self, customer: &Customer) -> AppResult<Customer> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Customer>(
            "UPDATE customers SET name = $1, city = $2, age = $3 WHERE id = $4 RETURNING *",
        )
        .bind(&customer.name)
        .bind(&customer.city)
        .bind(customer.age)
        .bind(customer.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(customer_not_found)?;

        tx.commit().await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(customer_not_found());
        }

        tx.commit().await?;
        Ok(())
    }
}
