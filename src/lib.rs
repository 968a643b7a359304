pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::file::AppConfig;

pub use crate::adapters::{
    memory::InMemoryCustomers, openai::OpenAiCompletion, webhook::WebhookNotifier,
};
pub use crate::core::{analyzer::InvoiceAnalyzer, registry::CustomerRegistry, tax_id};
pub use crate::domain::model::{
    Customer, CustomerPatch, IdentifierKind, InvoiceAnalysis, NewCustomer, TaxId,
};
pub use crate::domain::ports::{CustomerNotifier, CustomerRepository, TextCompletion};
pub use crate::utils::error::{CadastroError, Result};
