//! CPF/CNPJ document validation.
//!
//! A document is accepted when, after stripping mask characters, it is a
//! valid CPF (11 digits, individuals) or CNPJ (14 digits, organizations).

use std::sync::Arc;

use thiserror::Error;

/// Why a document was rejected.
///
/// Callers usually collapse both variants into a single "invalid document"
/// outcome; the split exists for diagnostics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDocument {
    /// Nothing left after removing mask characters.
    #[error("invalid CPF/CNPJ document (effectively empty or only mask chars)")]
    Blank,

    /// Wrong length, non-digit characters, or failed check digits.
    #[error("invalid CPF/CNPJ document")]
    Checksum,
}

/// Document validation capability.
pub trait DocumentValidator: Send + Sync {
    fn validate(&self, document: &str) -> Result<(), InvalidDocument>;

    /// Canonical form stored and indexed once `document` has passed
    /// [`validate`](Self::validate). Two spellings of the same document must
    /// normalize to the same string.
    fn normalize(&self, document: &str) -> String {
        document.to_string()
    }
}

impl<V> DocumentValidator for Arc<V>
where
    V: DocumentValidator + ?Sized,
{
    fn validate(&self, document: &str) -> Result<(), InvalidDocument> {
        (**self).validate(document)
    }

    fn normalize(&self, document: &str) -> String {
        (**self).normalize(document)
    }
}

/// Stateless CPF/CNPJ checksum validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpfCnpjValidator;

impl CpfCnpjValidator {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentValidator for CpfCnpjValidator {
    fn validate(&self, document: &str) -> Result<(), InvalidDocument> {
        let cleaned = clean(document);
        if cleaned.is_empty() {
            return Err(InvalidDocument::Blank);
        }
        if is_valid_cpf(&cleaned) || is_valid_cnpj(&cleaned) {
            Ok(())
        } else {
            Err(InvalidDocument::Checksum)
        }
    }

    /// Bare digits: `123.456.789-09` and `12345678909` are the same CPF.
    fn normalize(&self, document: &str) -> String {
        clean(document)
    }
}

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Remove mask characters (`.`, `-`, `/` and whitespace).
fn clean(document: &str) -> String {
    document
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '/') && !c.is_whitespace())
        .collect()
}

fn digits(cleaned: &str, len: usize) -> Option<Vec<u32>> {
    if cleaned.len() != len {
        return None;
    }
    let digits: Option<Vec<u32>> = cleaned.chars().map(|c| c.to_digit(10)).collect();
    let digits = digits?;
    // Repeated-digit sequences pass the arithmetic but are never issued.
    if digits.iter().all(|d| *d == digits[0]) {
        return None;
    }
    Some(digits)
}

fn is_valid_cpf(cleaned: &str) -> bool {
    let Some(d) = digits(cleaned, 11) else {
        return false;
    };
    let check = |n: usize| -> u32 {
        let sum: u32 = d[..n]
            .iter()
            .enumerate()
            .map(|(i, v)| v * (n as u32 + 1 - i as u32))
            .sum();
        (sum * 10) % 11 % 10
    };
    check(9) == d[9] && check(10) == d[10]
}

fn is_valid_cnpj(cleaned: &str) -> bool {
    let Some(d) = digits(cleaned, 14) else {
        return false;
    };
    let check = |weights: &[u32]| -> u32 {
        let sum: u32 = d.iter().zip(weights).map(|(v, w)| v * w).sum();
        match sum % 11 {
            r if r < 2 => 0,
            r => 11 - r,
        }
    };
    check(&CNPJ_FIRST_WEIGHTS) == d[12] && check(&CNPJ_SECOND_WEIGHTS) == d[13]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(document: &str) -> Result<(), InvalidDocument> {
        CpfCnpjValidator::new().validate(document)
    }

    #[test]
    fn accepts_valid_cpfs() {
        for doc in ["12345678909", "11144477735", "52998224725"] {
            assert_eq!(validate(doc), Ok(()), "{doc}");
        }
    }

    #[test]
    fn accepts_valid_cnpjs() {
        for doc in ["12345678000195", "11222333000181"] {
            assert_eq!(validate(doc), Ok(()), "{doc}");
        }
    }

    #[test]
    fn accepts_masked_documents() {
        assert_eq!(validate("123.456.789-09"), Ok(()));
        assert_eq!(validate("12.345.678/0001-95"), Ok(()));
        assert_eq!(validate(" 111.444.777-35 "), Ok(()));
    }

    #[test]
    fn rejects_bad_check_digits() {
        assert_eq!(validate("12345678900"), Err(InvalidDocument::Checksum));
        assert_eq!(validate("12345678000100"), Err(InvalidDocument::Checksum));
        assert_eq!(validate("11122233301"), Err(InvalidDocument::Checksum));
    }

    #[test]
    fn rejects_repeated_digits() {
        assert_eq!(validate("11111111111"), Err(InvalidDocument::Checksum));
        assert_eq!(validate("11111111111111"), Err(InvalidDocument::Checksum));
    }

    #[test]
    fn rejects_wrong_lengths_and_letters() {
        for doc in [
            "1234567890",
            "123456789012",
            "1234567800019",
            "123456780001950",
            "abcdefghijk",
            "abcdefghijklmn",
            "1234567890a",
        ] {
            assert_eq!(validate(doc), Err(InvalidDocument::Checksum), "{doc}");
        }
    }

    #[test]
    fn blank_after_cleaning_is_distinguished() {
        assert_eq!(validate(""), Err(InvalidDocument::Blank));
        assert_eq!(validate("..-/."), Err(InvalidDocument::Blank));
        assert_eq!(validate("   "), Err(InvalidDocument::Blank));
    }

    #[test]
    fn validator_works_through_arc() {
        let v: Arc<dyn DocumentValidator> = Arc::new(CpfCnpjValidator::new());
        assert!(v.validate("52998224725").is_ok());
        assert_eq!(v.normalize("529.982.247-25"), "52998224725");
    }

    #[test]
    fn masked_and_bare_forms_normalize_alike() {
        let v = CpfCnpjValidator::new();
        assert_eq!(v.normalize("123.456.789-09"), v.normalize("12345678909"));
        assert_eq!(v.normalize(" 12.345.678/0001-95 "), "12345678000195");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: masking never changes the outcome.
            #[test]
            fn masking_is_transparent(doc in "[0-9]{11}|[0-9]{14}") {
                let masked = if doc.len() == 11 {
                    format!("{}.{}.{}-{}", &doc[..3], &doc[3..6], &doc[6..9], &doc[9..])
                } else {
                    format!("{}.{}.{}/{}-{}", &doc[..2], &doc[2..5], &doc[5..8], &doc[8..12], &doc[12..])
                };
                prop_assert_eq!(validate(&doc), validate(&masked));
            }

            /// Property: anything that isn't 11 or 14 digits is rejected.
            #[test]
            fn other_lengths_rejected(doc in "[0-9]{1,10}|[0-9]{12,13}|[0-9]{15,20}") {
                prop_assert_eq!(validate(&doc), Err(InvalidDocument::Checksum));
            }
        }
    }
}
