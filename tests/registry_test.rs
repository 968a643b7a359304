use cadastro::{
    CadastroError, CustomerPatch, CustomerRegistry, InMemoryCustomers, NewCustomer,
    WebhookNotifier,
};
use httpmock::prelude::*;
use std::time::Duration;

fn notifier(server: &MockServer) -> WebhookNotifier {
    WebhookNotifier::new(server.url("/webhook/cliente-novo"), Duration::from_secs(5)).unwrap()
}

fn maria() -> NewCustomer {
    NewCustomer {
        name: "Maria Silva".to_string(),
        email: "maria@example.com".to_string(),
        tax_id: "111.444.777-35".to_string(),
    }
}

#[tokio::test]
async fn create_notifies_webhook_with_normalized_identifier() {
    let server = MockServer::start();
    let webhook_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/webhook/cliente-novo")
            .json_body_partial(
                r#"{"nome":"Maria Silva","email":"maria@example.com","cpf_cnpj":"11144477735"}"#,
            );
        then.status(200);
    });

    let registry = CustomerRegistry::new(InMemoryCustomers::new(), notifier(&server));
    let customer = registry.create(maria()).await.unwrap();

    webhook_mock.assert();
    assert_eq!(customer.tax_id, "11144477735");
}

#[tokio::test]
async fn webhook_outage_does_not_fail_registration() {
    let server = MockServer::start();
    let webhook_mock = server.mock(|when, then| {
        when.method(POST).path("/webhook/cliente-novo");
        then.status(500);
    });

    let registry = CustomerRegistry::new(InMemoryCustomers::new(), notifier(&server));
    let customer = registry.create(maria()).await.unwrap();

    webhook_mock.assert();
    assert_eq!(customer.id, 1);
    assert_eq!(registry.get(customer.id).await.unwrap().id, customer.id);
}

#[tokio::test]
async fn full_customer_lifecycle() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/webhook/cliente-novo");
        then.status(200);
    });

    let registry = CustomerRegistry::new(InMemoryCustomers::new(), notifier(&server));

    let customer = registry.create(maria()).await.unwrap();
    let company = registry
        .create(NewCustomer {
            name: "Empresa XYZ".to_string(),
            email: "contato@xyz.com.br".to_string(),
            tax_id: "11.222.333/0001-81".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(registry.list(0, 100).await.unwrap().len(), 2);

    // A punctuation-only difference is still the same identifier.
    let err = registry
        .create(NewCustomer {
            name: "Outra Maria".to_string(),
            email: "outra@example.com".to_string(),
            tax_id: "11144477735".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CadastroError::Duplicate { .. }));

    let updated = registry
        .update(
            company.id,
            CustomerPatch {
                name: Some("Empresa XYZ Ltda".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Empresa XYZ Ltda");

    registry.delete(customer.id).await.unwrap();
    let remaining = registry.list(0, 100).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, company.id);
}
