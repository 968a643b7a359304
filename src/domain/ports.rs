use crate::domain::model::Customer;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Single-shot call to an external generative text service.
///
/// Any transport-level failure (auth, network, rate limit, timeout) must be
/// surfaced as [`crate::utils::error::CadastroError::CompletionUnavailable`].
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn insert(&self, name: String, email: String, tax_id: String) -> Result<Customer>;
    async fn find_by_id(&self, id: u64) -> Result<Option<Customer>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>>;
    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Customer>>;
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Customer>>;
    async fn update(&self, customer: Customer) -> Result<Customer>;
    async fn delete(&self, id: u64) -> Result<bool>;
}

/// Outbound notification about a freshly registered customer.
#[async_trait]
pub trait CustomerNotifier: Send + Sync {
    async fn customer_created(&self, customer: &Customer) -> Result<()>;
}
