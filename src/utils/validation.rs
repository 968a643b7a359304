use crate::utils::error::{CadastroError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CadastroError::ValidationError {
            field: field_name.to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CadastroError::ValidationError {
                field: field_name.to_string(),
                message: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CadastroError::ValidationError {
            field: field_name.to_string(),
            message: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CadastroError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_min_length(field_name: &str, value: &str, min_chars: usize) -> Result<()> {
    if value.trim().chars().count() < min_chars {
        return Err(CadastroError::ValidationError {
            field: field_name.to_string(),
            message: format!("Value must have at least {} characters", min_chars),
        });
    }
    Ok(())
}

/// Structural e-mail check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is not this crate's concern.
pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    let invalid = |message: &str| CadastroError::ValidationError {
        field: field_name.to_string(),
        message: message.to_string(),
    };

    if value.chars().any(char::is_whitespace) {
        return Err(invalid("E-mail cannot contain whitespace"));
    }

    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid("E-mail must contain exactly one '@'")),
    };

    if local.is_empty() {
        return Err(invalid("E-mail local part cannot be empty"));
    }

    if domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err(invalid("E-mail domain must be a dotted hostname"));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CadastroError::ValidationError {
            field: field_name.to_string(),
            message: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
