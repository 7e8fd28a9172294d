//! Syntactic and range validation of CIDR text.

use super::CidrError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}/[0-9]{1,2}$").expect("Invalid Regex?");
}

/// Validate a CIDR string such as `192.168.1.0/24`.
///
/// Checks run in a fixed order so the reported error is deterministic:
/// syntax, then prefix range, then octet range.
pub fn validate_cidr(text: &str) -> Result<(), CidrError> {
    if !CIDR_RE.is_match(text) {
        return Err(CidrError::MalformedSyntax);
    }

    let (ip, prefix) = text.split_once('/').ok_or(CidrError::MalformedSyntax)?;
    let prefix: u8 = prefix.parse().map_err(|_| CidrError::MalformedSyntax)?;
    if prefix > 32 {
        return Err(CidrError::PrefixOutOfRange);
    }

    for octet in ip.split('.') {
        let octet: u16 = octet.parse().map_err(|_| CidrError::MalformedSyntax)?;
        if octet > 255 {
            return Err(CidrError::OctetOutOfRange);
        }
    }

    Ok(())
}

/// Validation outcome in the shape the entry form consumes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<(), CidrError>> for ValidationResult {
    fn from(result: Result<(), CidrError>) -> Self {
        match result {
            Ok(()) => ValidationResult {
                is_valid: true,
                error: None,
            },
            Err(e) => ValidationResult {
                is_valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Validate and report as a [`ValidationResult`].
pub fn validate(text: &str) -> ValidationResult {
    validate_cidr(text).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        assert_eq!(validate_cidr("192.168.1.0/24"), Ok(()));
        assert_eq!(validate_cidr("0.0.0.0/0"), Ok(()));
        assert_eq!(validate_cidr("255.255.255.255/32"), Ok(()));
        assert_eq!(validate_cidr("010.001.000.000/08"), Ok(()));
    }

    #[test]
    fn test_validate_malformed() {
        for text in [
            "invalid",
            "",
            "192.168.1.0",
            "192.168.1/24",
            "192.168.1.0/",
            "192.168.1.0/123",
            "1921.168.1.0/24",
            " 192.168.1.0/24",
            "192.168.1.0/24 ",
            "192.168.1.0/-1",
            "+1.2.3.4/8",
            "١٩٢.168.1.0/24",
        ] {
            assert_eq!(
                validate_cidr(text),
                Err(CidrError::MalformedSyntax),
                "expected syntax error for {text:?}"
            );
        }
    }

    #[test]
    fn test_validate_prefix_out_of_range() {
        let result = validate("192.168.1.0/33");
        assert!(!result.is_valid);
        assert!(result.error.unwrap().contains("between 0 and 32"));
        assert_eq!(validate_cidr("10.0.0.0/99"), Err(CidrError::PrefixOutOfRange));
    }

    #[test]
    fn test_validate_octet_out_of_range() {
        assert_eq!(validate_cidr("256.0.0.0/8"), Err(CidrError::OctetOutOfRange));
        assert_eq!(validate_cidr("10.0.0.999/32"), Err(CidrError::OctetOutOfRange));
    }

    #[test]
    fn test_prefix_checked_before_octets() {
        assert_eq!(validate_cidr("300.0.0.0/40"), Err(CidrError::PrefixOutOfRange));
    }

    #[test]
    fn test_validation_result_shape() {
        assert_eq!(
            validate("10.0.0.0/8"),
            ValidationResult {
                is_valid: true,
                error: None
            }
        );
        let bad = validate("invalid");
        assert!(!bad.is_valid);
        assert!(bad.error.is_some());
    }
}
