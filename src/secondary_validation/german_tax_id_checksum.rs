use crate::secondary_validation::{Rejection, Validator};

/// Number of characters of a tax id, check digit included.
pub const TAX_ID_LENGTH: usize = 11;
const PAYLOAD_LENGTH: usize = TAX_ID_LENGTH - 1;

/// Steuerliche Identifikationsnummer.
///
/// A tax id is 11 ASCII digits without a leading zero. Among the first 10 digits exactly
/// one digit value occurs twice or three times (rule in force since 2017, applied to every
/// id since ids carry no issuing date). The last digit is the ISO/IEC 7064 MOD 11,10 check
/// digit of the first 10.
// https://de.wikipedia.org/wiki/Steuerliche_Identifikationsnummer
pub struct GermanTaxIdChecksum;

impl GermanTaxIdChecksum {
    pub(crate) fn check(&self, candidate: &str) -> Result<(), Rejection> {
        let chars: Vec<char> = candidate.chars().collect();
        if chars.len() != TAX_ID_LENGTH {
            return Err(Rejection::Length);
        }

        // Characters that are not digits parse as 0 and are caught when the digits are
        // joined back and compared with the candidate.
        let mut digits = [0u32; TAX_ID_LENGTH];
        for (digit, c) in digits.iter_mut().zip(&chars) {
            *digit = c.to_digit(10).unwrap_or(0);
        }
        let reconstituted: String = digits
            .iter()
            .filter_map(|digit| char::from_digit(*digit, 10))
            .collect();
        if reconstituted != candidate {
            return Err(Rejection::NonDigit);
        }

        if digits[0] == 0 {
            return Err(Rejection::LeadingZero);
        }

        let (payload, check_digit) = digits.split_at(PAYLOAD_LENGTH);
        if !has_valid_digit_distribution(payload) {
            return Err(Rejection::Distribution);
        }
        if mod11_10_check_digit(payload) != check_digit[0] {
            return Err(Rejection::Checksum);
        }
        Ok(())
    }
}

impl Validator for GermanTaxIdChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.check(candidate).is_ok()
    }
}

/// Exactly one digit value must occur two or three times.
fn has_valid_digit_distribution(payload: &[u32]) -> bool {
    let mut counts = [0u8; 10];
    for digit in payload {
        counts[*digit as usize] += 1;
    }
    counts
        .iter()
        .filter(|&&count| count == 2 || count == 3)
        .count()
        == 1
}

/// ISO/IEC 7064 MOD 11,10 check digit of `payload`.
fn mod11_10_check_digit(payload: &[u32]) -> u32 {
    let mut product = 10;
    for digit in payload {
        let mut sum = (product + digit) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (sum * 2) % 11;
    }
    (11 - product) % 10
}

/// Computes the check digit to append to 10 payload digits.
///
/// Returns `None` unless `payload` is exactly 10 ASCII digits. The distribution rule is not
/// checked, so the result only yields a valid tax id for a payload that follows it.
pub fn compute_check_digit(payload: &str) -> Option<u32> {
    let digits = payload
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()?;
    if digits.len() != PAYLOAD_LENGTH {
        return None;
    }
    Some(mod11_10_check_digit(&digits))
}
