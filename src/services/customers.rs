//! Customers service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer, NewCustomer, UpdateCustomer},
    repository::CustomerStore,
};

#[derive(Clone)]
pub struct CustomersService {
    store: Arc<dyn CustomerStore>,
}

impl CustomersService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        self.store.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Customer> {
        self.store.get_by_id(id).await.map_err(|e| {
            if let AppError::NotFound(_) = e {
                tracing::warn!("Customer {} not found", id);
            }
            e
        })
    }

    pub async fn create(&self, data: CreateCustomer) -> AppResult<Customer> {
        let customer = NewCustomer::try_from(data)?;

        let created = self
            .store
            .create(&customer)
            .await
            .map_err(|e| AppError::persistence("Error creating customer", e))?;

        tracing::info!("Customer added: id={}", created.id);
        Ok(created)
    }

    pub async fn update(&self, id: i32, patch: UpdateCustomer) -> AppResult<Customer> {
        let current = self.get(id).await?;
        let customer = current.updated(patch)?;

        let updated = self
            .store
            .update(&customer)
            .await
            .map_err(|e| AppError::persistence("Error updating customer", e))?;

        tracing::info!("Customer updated: id={}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get(id).await?;

        self.store
            .delete(id)
            .await
            .map_err(|e| AppError::persistence("Error deleting customer", e))?;

        tracing::info!("Customer deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::customers::MockCustomerStore;

    fn alice() -> Customer {
        Customer {
            id: 2,
            name: "Alice Smith".to_string(),
            city: "Los Angeles".to_string(),
            age: 25,
        }
    }

    #[tokio::test]
    async fn test_create_from_form_values() {
        let mut store = MockCustomerStore::new();
        store
            .expect_create()
            .withf(|c: &NewCustomer| c.name == "John Doe" && c.city == "New York" && c.age == 30)
            .times(1)
            .returning(|c| {
                Ok(Customer {
                    id: 1,
                    name: c.name.clone(),
                    city: c.city.clone(),
                    age: c.age,
                })
            });

        let service = CustomersService::new(Arc::new(store));
        let created = service
            .create(CreateCustomer {
                name: "John Doe".to_string(),
                city: "New York".to_string(),
                age: "30".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_age() {
        let mut store = MockCustomerStore::new();
        store.expect_create().never();

        let service = CustomersService::new(Arc::new(store));
        let err = service
            .create(CreateCustomer {
                name: "Short".to_string(),
                city: "City".to_string(),
                age: 151.into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Age must be between 0 and 150"));
    }

    #[tokio::test]
    async fn test_update_keeps_unspecified_fields() {
        let mut store = MockCustomerStore::new();
        store.expect_get_by_id().returning(|_| Ok(alice()));
        store
            .expect_update()
            .withf(|c: &Customer| c.name == "Alice Smith" && c.city == "Chicago" && c.age == 25)
            .returning(|c| Ok(c.clone()));

        let service = CustomersService::new(Arc::new(store));
        let updated = service
            .update(
                2,
                UpdateCustomer {
                    city: Some("Chicago".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.city, "Chicago");
    }

    #[tokio::test]
    async fn test_update_store_failure() {
        let mut store = MockCustomerStore::new();
        store.expect_get_by_id().returning(|_| Ok(alice()));
        store
            .expect_update()
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolClosed)));

        let service = CustomersService::new(Arc::new(store));
        match service.update(2, UpdateCustomer::default()).await.unwrap_err() {
            AppError::Persistence(msg) => assert!(msg.starts_with("Error updating customer: ")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete() {
        let mut store = MockCustomerStore::new();
        store.expect_get_by_id().returning(|_| Ok(alice()));
        store.expect_delete().withf(|id: &i32| *id == 2).times(1).returning(|_| Ok(()));

        let service = CustomersService::new(Arc::new(store));
        service.delete(2).await.unwrap();
    }
}
