mod german_tax_id_checksum;

pub use crate::secondary_validation::german_tax_id_checksum::{
    compute_check_digit, GermanTaxIdChecksum, TAX_ID_LENGTH,
};
use strum::IntoStaticStr;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// The first structural check a candidate failed. Checks run in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum Rejection {
    /// The raw bytes were not valid UTF-8.
    Encoding,
    Length,
    NonDigit,
    LeadingZero,
    Distribution,
    Checksum,
}
