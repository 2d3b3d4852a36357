use crate::observability::{record_verdict, NO_LABEL};
use crate::secondary_validation::{GermanTaxIdChecksum, Rejection};

/// Checks that `candidate` is a structurally valid tax id.
///
/// The candidate must already be in machine form: separators are rejected, not stripped. Bad
/// input is never an error, it only yields `false`.
pub fn verify(candidate: &str) -> bool {
    let verdict = GermanTaxIdChecksum.check(candidate);
    record_verdict(&NO_LABEL, verdict);
    verdict.is_ok()
}

/// Same as [verify] for raw bytes. Bytes that are not valid UTF-8 are rejected.
pub fn verify_bytes(candidate: &[u8]) -> bool {
    match std::str::from_utf8(candidate) {
        Ok(candidate) => verify(candidate),
        Err(_) => {
            record_verdict(&NO_LABEL, Err(Rejection::Encoding));
            false
        }
    }
}
