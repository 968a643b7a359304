use crate::domain::model::{IdentifierKind, TaxId};
use crate::utils::error::{CadastroError, Result};

const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Normalizes a raw CPF/CNPJ string and verifies its check digits.
///
/// Every non-digit character is stripped first, so punctuated and bare
/// inputs validate identically. The kind is decided by digit count alone:
/// 11 digits take the CPF path, 14 the CNPJ path.
pub fn normalize_and_validate(raw: &str) -> Result<TaxId> {
    let normalized: String = raw.chars().filter(char::is_ascii_digit).collect();
    let digits: Vec<u32> = normalized.chars().filter_map(|c| c.to_digit(10)).collect();

    let kind = match digits.len() {
        11 => IdentifierKind::Cpf,
        14 => IdentifierKind::Cnpj,
        n => return Err(CadastroError::InvalidLength { digits: n }),
    };

    // Repdigits satisfy the checksum arithmetic but are known-invalid documents.
    if digits.iter().all(|&d| d == digits[0]) {
        return Err(CadastroError::InvalidIdentifier);
    }

    match kind {
        IdentifierKind::Cpf => verify_cpf(&digits)?,
        IdentifierKind::Cnpj => verify_cnpj(&digits)?,
    }

    Ok(TaxId::new(normalized, kind))
}

/// Check digit from a weighted sum: 0 when `sum mod 11 < 2`, else the
/// complement to 11.
fn check_digit(sum: u32) -> u32 {
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

fn verify_cpf(digits: &[u32]) -> Result<()> {
    let first: u32 = (0..9).map(|i| digits[i] * (10 - i as u32)).sum();
    if digits[9] != check_digit(first) {
        return Err(CadastroError::ChecksumMismatch);
    }

    // The second pass weighs the just-verified first check digit as well.
    let second: u32 = (0..10).map(|i| digits[i] * (11 - i as u32)).sum();
    if digits[10] != check_digit(second) {
        return Err(CadastroError::ChecksumMismatch);
    }

    Ok(())
}

fn verify_cnpj(digits: &[u32]) -> Result<()> {
    let first: u32 = digits
        .iter()
        .zip(CNPJ_WEIGHTS_FIRST.iter())
        .map(|(d, w)| d * w)
        .sum();
    if digits[12] != check_digit(first) {
        return Err(CadastroError::ChecksumMismatch);
    }

    let second: u32 = digits
        .iter()
        .zip(CNPJ_WEIGHTS_SECOND.iter())
        .map(|(d, w)| d * w)
        .sum();
    if digits[13] != check_digit(second) {
        return Err(CadastroError::ChecksumMismatch);
    }

    Ok(())
}
