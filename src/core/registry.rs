use crate::core::tax_id;
use crate::domain::model::{Customer, CustomerPatch, NewCustomer};
use crate::domain::ports::{CustomerNotifier, CustomerRepository};
use crate::utils::error::{CadastroError, Result};
use crate::utils::validation::{validate_email, validate_min_length};

/// Customer registration service over repository and notifier ports.
///
/// Enforces uniqueness of e-mail and normalized tax identifier. The
/// notifier call after a successful create is fire-and-forget: its failure
/// is logged and never fails the registration.
pub struct CustomerRegistry<R: CustomerRepository, N: CustomerNotifier> {
    repository: R,
    notifier: N,
}

impl<R: CustomerRepository, N: CustomerNotifier> CustomerRegistry<R, N> {
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn create(&self, input: NewCustomer) -> Result<Customer> {
        let name = normalized_name(&input.name)?;
        let email = normalized_email(&input.email)?;
        let tax_id = tax_id::normalize_and_validate(&input.tax_id)?.into_digits();

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(CadastroError::Duplicate {
                field: "email".to_string(),
                value: email,
            });
        }

        if self.repository.find_by_tax_id(&tax_id).await?.is_some() {
            return Err(CadastroError::Duplicate {
                field: "cpf_cnpj".to_string(),
                value: tax_id,
            });
        }

        let customer = self.repository.insert(name, email, tax_id).await?;
        tracing::info!("Customer {} registered: {}", customer.id, customer.name);

        if let Err(e) = self.notifier.customer_created(&customer).await {
            tracing::warn!("⚠️ Customer notification failed: {}", e);
        }

        Ok(customer)
    }

    pub async fn get(&self, id: u64) -> Result<Customer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CadastroError::NotFound { id })
    }

    pub async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Customer>> {
        self.repository.list(offset, limit).await
    }

    pub async fn update(&self, id: u64, patch: CustomerPatch) -> Result<Customer> {
        let mut customer = self.get(id).await?;

        if let Some(name) = patch.name {
            customer.name = normalized_name(&name)?;
        }

        if let Some(email) = patch.email {
            let email = normalized_email(&email)?;
            if let Some(existing) = self.repository.find_by_email(&email).await? {
                if existing.id != id {
                    return Err(CadastroError::Duplicate {
                        field: "email".to_string(),
                        value: email,
                    });
                }
            }
            customer.email = email;
        }

        if let Some(raw) = patch.tax_id {
            let tax_id = tax_id::normalize_and_validate(&raw)?.into_digits();
            if let Some(existing) = self.repository.find_by_tax_id(&tax_id).await? {
                if existing.id != id {
                    return Err(CadastroError::Duplicate {
                        field: "cpf_cnpj".to_string(),
                        value: tax_id,
                    });
                }
            }
            customer.tax_id = tax_id;
        }

        self.repository.update(customer).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        if self.repository.delete(id).await? {
            tracing::info!("Customer {} deleted", id);
            Ok(())
        } else {
            Err(CadastroError::NotFound { id })
        }
    }
}

fn normalized_name(raw: &str) -> Result<String> {
    validate_min_length("nome", raw, 2)?;
    Ok(raw.trim().to_string())
}

fn normalized_email(raw: &str) -> Result<String> {
    let email = raw.trim().to_lowercase();
    validate_email("email", &email)?;
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCustomers;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    struct RecordingNotifier {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl CustomerNotifier for RecordingNotifier {
        async fn customer_created(&self, _customer: &Customer) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(CadastroError::NotificationFailed {
                    message: "webhook down".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn registry() -> CustomerRegistry<InMemoryCustomers, RecordingNotifier> {
        CustomerRegistry::new(InMemoryCustomers::new(), RecordingNotifier::new())
    }

    fn maria() -> NewCustomer {
        NewCustomer {
            name: "  Maria Silva  ".to_string(),
            email: "Maria@Example.COM".to_string(),
            tax_id: "111.444.777-35".to_string(),
        }
    }

    #[tokio::test]
    async fn create_normalizes_and_notifies() {
        let notifier = RecordingNotifier::new();
        let registry = CustomerRegistry::new(InMemoryCustomers::new(), notifier.clone());

        let customer = registry.create(maria()).await.unwrap();

        assert_eq!(customer.name, "Maria Silva");
        assert_eq!(customer.email, "maria@example.com");
        assert_eq!(customer.tax_id, "11144477735");
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields() {
        let registry = registry();

        let mut short_name = maria();
        short_name.name = " J ".to_string();
        assert!(matches!(
            registry.create(short_name).await.unwrap_err(),
            CadastroError::ValidationError { .. }
        ));

        let mut bad_email = maria();
        bad_email.email = "not-an-email".to_string();
        assert!(matches!(
            registry.create(bad_email).await.unwrap_err(),
            CadastroError::ValidationError { .. }
        ));

        let mut bad_tax_id = maria();
        bad_tax_id.tax_id = "111.444.777-34".to_string();
        assert!(matches!(
            registry.create(bad_tax_id).await.unwrap_err(),
            CadastroError::ChecksumMismatch
        ));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email_and_tax_id() {
        let registry = registry();
        registry.create(maria()).await.unwrap();

        let mut same_email = maria();
        same_email.tax_id = "11.222.333/0001-81".to_string();
        assert!(matches!(
            registry.create(same_email).await.unwrap_err(),
            CadastroError::Duplicate { .. }
        ));

        // Duplicate detection runs on the normalized digits, so a
        // differently punctuated identifier still collides.
        let mut same_tax_id = maria();
        same_tax_id.email = "outra@example.com".to_string();
        same_tax_id.tax_id = "11144477735".to_string();
        assert!(matches!(
            registry.create(same_tax_id).await.unwrap_err(),
            CadastroError::Duplicate { .. }
        ));
    }

    #[tokio::test]
    async fn notifier_failure_does_not_fail_create() {
        let notifier = RecordingNotifier::failing();
        let registry = CustomerRegistry::new(InMemoryCustomers::new(), notifier.clone());

        let customer = registry.create(maria()).await.unwrap();

        assert_eq!(customer.id, 1);
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn update_revalidates_and_excludes_self_from_uniqueness() {
        let registry = registry();
        let customer = registry.create(maria()).await.unwrap();

        // Re-submitting the customer's own identifier is not a conflict.
        let patch = CustomerPatch {
            tax_id: Some("111.444.777-35".to_string()),
            ..Default::default()
        };
        let updated = registry.update(customer.id, patch).await.unwrap();
        assert_eq!(updated.tax_id, "11144477735");

        // An invalid identifier is rejected on update as well.
        let patch = CustomerPatch {
            tax_id: Some("111.444.777-34".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            registry.update(customer.id, patch).await.unwrap_err(),
            CadastroError::ChecksumMismatch
        ));

        let other = registry
            .create(NewCustomer {
                name: "Empresa XYZ".to_string(),
                email: "contato@xyz.com.br".to_string(),
                tax_id: "11.222.333/0001-81".to_string(),
            })
            .await
            .unwrap();

        // Taking another customer's e-mail is a conflict.
        let patch = CustomerPatch {
            email: Some("maria@example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            registry.update(other.id, patch).await.unwrap_err(),
            CadastroError::Duplicate { .. }
        ));
    }

    #[tokio::test]
    async fn get_list_delete_roundtrip() {
        let registry = registry();
        let customer = registry.create(maria()).await.unwrap();

        assert_eq!(registry.get(customer.id).await.unwrap().id, customer.id);
        assert_eq!(registry.list(0, 100).await.unwrap().len(), 1);

        registry.delete(customer.id).await.unwrap();
        assert!(matches!(
            registry.get(customer.id).await.unwrap_err(),
            CadastroError::NotFound { .. }
        ));
        assert!(matches!(
            registry.delete(customer.id).await.unwrap_err(),
            CadastroError::NotFound { .. }
        ));
    }
}
