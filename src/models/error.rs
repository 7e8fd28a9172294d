//! Error taxonomy for CIDR validation and block calculation.

use thiserror::Error;

/// Everything that can go wrong turning user text into a block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Invalid CIDR notation (e.g., 192.168.1.0/24)")]
    MalformedSyntax,

    #[error("Prefix length must be between 0 and 32")]
    PrefixOutOfRange,

    #[error("Each octet must be between 0 and 255")]
    OctetOutOfRange,

    #[error("Error occurred during subnet calculation: {0}")]
    CalculationFailure(String),
}
