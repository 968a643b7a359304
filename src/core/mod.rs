pub mod analyzer;
pub mod registry;
pub mod tax_id;

pub use crate::domain::model::{
    Customer, CustomerPatch, IdentifierKind, InvoiceAnalysis, NewCustomer, TaxId,
};
pub use crate::domain::ports::{CustomerNotifier, CustomerRepository, TextCompletion};
pub use crate::utils::error::Result;
