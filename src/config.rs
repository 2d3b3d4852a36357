use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

use crate::country::Country;
use crate::format::{format, Format, FormatError};

/// How [format] renders a tax id.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FormatOptions {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub format: Format,
    /// Required by [Format::Human].
    #[serde(default)]
    pub country: Option<Country>,
    /// The input is trusted to be machine form already and is not stripped.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub already_machine_format: bool,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self, format: Format) -> Self {
        self.mutate_clone(|x| x.format = format)
    }

    pub fn country(&self, country: Country) -> Self {
        self.mutate_clone(|x| x.country = Some(country))
    }

    pub fn already_machine_format(&self, already_machine_format: bool) -> Self {
        self.mutate_clone(|x| x.already_machine_format = already_machine_format)
    }

    pub fn apply(&self, input: &str) -> Result<String, FormatError> {
        format(input, self)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
