// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod config;
mod country;
mod format;
mod observability;
mod secondary_validation;
mod validation;

// This is the public API of the tax id library
pub use config::FormatOptions;
pub use country::Country;
pub use format::{format, to_human_form, to_machine_form, Format, FormatError};
pub use observability::{COUNTRY, FORMAT_ERRORS, OUTCOME, REASON, VALIDATIONS};
pub use secondary_validation::{
    compute_check_digit, GermanTaxIdChecksum, Validator, TAX_ID_LENGTH,
};
pub use validation::{verify, verify_bytes};
