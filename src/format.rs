use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::FormatOptions;
use crate::country::Country;
use crate::observability::record_format_error;

const GROUP_SIZE: usize = 3;
const GROUP_SEPARATOR: &str = " ";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Digits only, no separators.
    #[default]
    Machine,
    /// Digits grouped by 3, separated by spaces.
    Human,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The caller misused the API, e.g. asked for the human readable form without a country.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

const MISSING_COUNTRY: &str = "human readable format requires a country";

/// Strips every character that is not an ASCII digit.
pub fn to_machine_form(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Reduces `input` to machine form then groups its digits by 3.
///
/// `"12345678901"` becomes `"123 456 789 01"`.
pub fn to_human_form(input: &str, country: Option<Country>) -> Result<String, FormatError> {
    format(
        input,
        &FormatOptions {
            format: Format::Human,
            country,
            already_machine_format: false,
        },
    )
}

pub fn format(input: &str, options: &FormatOptions) -> Result<String, FormatError> {
    match options.format {
        Format::Machine if options.already_machine_format => Ok(input.to_owned()),
        Format::Machine => Ok(to_machine_form(input)),
        Format::Human => {
            if options.country.is_none() {
                record_format_error();
                return Err(FormatError::InvalidArgument(MISSING_COUNTRY));
            }
            if options.already_machine_format {
                Ok(group(input))
            } else {
                Ok(group(&to_machine_form(input)))
            }
        }
    }
}

/// Splits every space separated word into runs of [GROUP_SIZE] characters from the left, the
/// last run of a word may be shorter. Spaces already in the input stay where they are.
fn group(input: &str) -> String {
    input
        .split(GROUP_SEPARATOR)
        .map(|word| {
            let chars: Vec<char> = word.chars().collect();
            chars
                .chunks(GROUP_SIZE)
                .map(|run| run.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(GROUP_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join(GROUP_SEPARATOR)
        .trim()
        .to_owned()
}
