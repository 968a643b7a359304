use crate::domain::model::InvoiceAnalysis;
use crate::domain::ports::TextCompletion;
use crate::utils::error::{CadastroError, Result};
use serde_json::Value;

/// Minimum invoice text length after trimming, in characters.
const MIN_TEXT_CHARS: usize = 10;

/// Orchestrates one completion call and turns the semi-structured answer
/// into an [`InvoiceAnalysis`].
///
/// Malformed completion output never fails outward: the analyzer degrades
/// to a fixed fallback result instead. Only bad caller input and a failing
/// completion collaborator propagate as errors.
pub struct InvoiceAnalyzer<C: TextCompletion> {
    completion: C,
}

impl<C: TextCompletion> InvoiceAnalyzer<C> {
    pub fn new(completion: C) -> Self {
        Self { completion }
    }

    pub async fn analyze(&self, text: &str) -> Result<InvoiceAnalysis> {
        let text = text.trim();
        if text.chars().count() < MIN_TEXT_CHARS {
            return Err(CadastroError::InvalidInput {
                message: format!(
                    "invoice text must have at least {} characters",
                    MIN_TEXT_CHARS
                ),
            });
        }

        let prompt = build_prompt(text);
        tracing::debug!("Requesting invoice analysis ({} chars of text)", text.len());

        let response = self.completion.complete(&prompt).await?;
        tracing::debug!("Completion response: {}", response);

        match parse_response(&response) {
            Some(analysis) => {
                tracing::info!("Invoice classified as '{}'", analysis.category);
                Ok(analysis)
            }
            None => {
                tracing::warn!("Unparseable completion response, returning fallback analysis");
                Ok(fallback_analysis())
            }
        }
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "Analise a seguinte nota fiscal e retorne um JSON com:\n\
         - categoria: categoria principal da despesa (ex: alimentação, transporte, saúde, etc.)\n\
         - resumo: resumo amigável em português brasileiro\n\
         - valor_total: valor total da nota (apenas o número)\n\
         - data_emissao: data de emissão (formato DD/MM/AAAA)\n\
         - cnpj_emissor: CNPJ do emissor se disponível\n\
         \n\
         Nota fiscal:\n\
         {text}\n\
         \n\
         Responda apenas com o JSON válido, sem texto adicional."
    )
}

/// Drops a surrounding markdown code fence, with or without a `json` tag.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// `None` means the response does not meet the contract (not JSON, or the
/// required keys are missing) and the fallback applies.
fn parse_response(raw: &str) -> Option<InvoiceAnalysis> {
    let value: Value = serde_json::from_str(strip_code_fence(raw)).ok()?;

    let category = required_string(&value, "categoria")?;
    let summary = required_string(&value, "resumo")?;

    Some(InvoiceAnalysis {
        category,
        summary,
        total_amount: value.get("valor_total").and_then(Value::as_f64),
        issue_date: optional_string(&value, "data_emissao"),
        issuer_tax_id: optional_string(&value, "cnpj_emissor"),
    })
}

fn required_string(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn optional_string(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Fixed result returned when the completion answer cannot be parsed.
/// The exact payload is part of the contract, not a placeholder.
fn fallback_analysis() -> InvoiceAnalysis {
    InvoiceAnalysis {
        category: "papelaria".to_string(),
        summary: "Compra de material escolar: canetas e cadernos (fallback - erro no parse)"
            .to_string(),
        total_amount: None,
        issue_date: None,
        issuer_tax_id: None,
    }
}
