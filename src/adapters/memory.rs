use crate::domain::model::Customer;
use crate::domain::ports::CustomerRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory [`CustomerRepository`]. The only storage this crate ships;
/// a relational adapter is an embedder concern.
#[derive(Clone, Default)]
pub struct InMemoryCustomers {
    inner: Arc<Mutex<Store>>,
}

#[derive(Default)]
struct Store {
    next_id: u64,
    customers: Vec<Customer>,
}

impl InMemoryCustomers {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn insert(&self, name: String, email: String, tax_id: String) -> Result<Customer> {
        let mut store = self.inner.lock().await;
        store.next_id += 1;
        let customer = Customer {
            id: store.next_id,
            name,
            email,
            tax_id,
            created_at: Utc::now(),
        };
        store.customers.push(customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Customer>> {
        let store = self.inner.lock().await;
        Ok(store.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let store = self.inner.lock().await;
        Ok(store.customers.iter().find(|c| c.email == email).cloned())
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Customer>> {
        let store = self.inner.lock().await;
        Ok(store.customers.iter().find(|c| c.tax_id == tax_id).cloned())
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Customer>> {
        let store = self.inner.lock().await;
        Ok(store
            .customers
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(&self, customer: Customer) -> Result<Customer> {
        let mut store = self.inner.lock().await;
        if let Some(existing) = store.customers.iter_mut().find(|c| c.id == customer.id) {
            *existing = customer.clone();
        }
        Ok(customer)
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let mut store = self.inner.lock().await;
        let before = store.customers.len();
        store.customers.retain(|c| c.id != id);
        Ok(store.customers.len() < before)
    }
}
