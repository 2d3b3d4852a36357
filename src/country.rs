use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::observability::{record_verdict, Labels, COUNTRY};
use crate::secondary_validation::{GermanTaxIdChecksum, Rejection, Validator};

/// Country issuing the tax id, written as its ISO 3166-1 alpha-2 code.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Country {
    #[serde(rename = "DE")]
    #[strum(serialize = "DE")]
    Germany,
}

impl Country {
    pub(crate) fn check(&self, candidate: &str) -> Result<(), Rejection> {
        match self {
            Country::Germany => GermanTaxIdChecksum.check(candidate),
        }
    }
}

impl Validator for Country {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let verdict = self.check(candidate);
        let code: &'static str = self.into();
        record_verdict(&Labels::new(&[(COUNTRY, code)]), verdict);
        verdict.is_ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token};
    use std::str::FromStr;

    #[test]
    fn test_country_code() {
        assert_eq!(Country::Germany.to_string(), "DE");
        assert_eq!(Country::from_str("DE"), Ok(Country::Germany));
        assert_eq!(Country::from_str("de"), Ok(Country::Germany));
        assert!(Country::from_str("FR").is_err());
    }

    #[test]
    fn test_country_serde() {
        assert_tokens(
            &Country::Germany,
            &[Token::UnitVariant {
                name: "Country",
                variant: "DE",
            }],
        );
    }

    #[test]
    fn test_dispatch_to_checksum() {
        assert!(Country::Germany.is_valid_match("86095742719"));
        assert!(!Country::Germany.is_valid_match("86095742710"));
        assert!(!Country::Germany.is_valid_match("86 095 742 719"));
        assert_eq!(
            Country::Germany.check("01234567890"),
            Err(Rejection::LeadingZero)
        );
    }
}
