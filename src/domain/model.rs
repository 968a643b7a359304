use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of Brazilian tax identifier, decided by normalized digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierKind {
    Cpf,
    Cnpj,
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::Cpf => write!(f, "CPF"),
            IdentifierKind::Cnpj => write!(f, "CNPJ"),
        }
    }
}

/// A normalized, checksum-verified CPF or CNPJ.
///
/// Only constructed through [`crate::core::tax_id::normalize_and_validate`],
/// so holding one means the digits passed both check digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxId {
    digits: String,
    kind: IdentifierKind,
}

impl TaxId {
    pub(crate) fn new(digits: String, kind: IdentifierKind) -> Self {
        Self { digits, kind }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn into_digits(self) -> String {
        self.digits
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digits)
    }
}

/// Structured result of analyzing invoice text.
///
/// Wire keys follow the upstream service contract (Portuguese field names).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceAnalysis {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "resumo")]
    pub summary: String,
    #[serde(rename = "valor_total")]
    pub total_amount: Option<f64>,
    #[serde(rename = "data_emissao")]
    pub issue_date: Option<String>,
    #[serde(rename = "cnpj_emissor")]
    pub issuer_tax_id: Option<String>,
}

/// Customer registration input as supplied by a caller, unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "cpf_cnpj")]
    pub tax_id: String,
}

/// A registered customer. `tax_id` holds the normalized digit string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "cpf_cnpj")]
    pub tax_id: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update for an existing customer. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPatch {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "cpf_cnpj")]
    pub tax_id: Option<String>,
}
