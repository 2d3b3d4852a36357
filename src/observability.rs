use metrics::{counter, IntoLabels, Label, SharedString};
use tracing::trace;

use crate::secondary_validation::Rejection;

/// Counter incremented once per verified candidate.
pub const VALIDATIONS: &str = "tax_id.validations";
/// Counter incremented when formatting is rejected as API misuse.
pub const FORMAT_ERRORS: &str = "tax_id.format_errors";

pub const OUTCOME: &str = "outcome";
pub const REASON: &str = "reason";
pub const COUNTRY: &str = "country";

/// Holder of the [Label]s attached to the validation metrics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    fn with_label(&self, key: &'static str, value: &'static str) -> Labels {
        let mut labels = self.0.clone();
        labels.push(Label::new(key, value));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

pub(crate) fn record_verdict(labels: &Labels, verdict: Result<(), Rejection>) {
    match verdict {
        Ok(()) => counter!(VALIDATIONS, labels.with_label(OUTCOME, "valid")).increment(1),
        Err(rejection) => {
            let reason: &'static str = rejection.into();
            // Never log the candidate itself, it is personal data.
            trace!(reason, "tax id rejected");
            counter!(
                VALIDATIONS,
                labels
                    .with_label(OUTCOME, "invalid")
                    .with_label(REASON, reason)
            )
            .increment(1);
        }
    }
}

pub(crate) fn record_format_error() {
    trace!("human readable format requested without a country");
    counter!(FORMAT_ERRORS).increment(1);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_labels_keep_order() {
        let labels = Labels::new(&[(COUNTRY, "DE")])
            .with_label(OUTCOME, "invalid")
            .with_label(REASON, "checksum");

        assert_eq!(
            labels.into_labels(),
            vec![
                Label::new(COUNTRY, "DE"),
                Label::new(OUTCOME, "invalid"),
                Label::new(REASON, "checksum"),
            ]
        );
    }

    #[test]
    fn test_no_label_is_empty() {
        assert!(NO_LABEL.into_labels().is_empty());
        assert_eq!(
            NO_LABEL.with_label(OUTCOME, "valid").into_labels(),
            vec![Label::new(OUTCOME, "valid")]
        );
    }

    #[test]
    fn test_rejection_label_names() {
        let names: Vec<&'static str> = [
            Rejection::Encoding,
            Rejection::Length,
            Rejection::NonDigit,
            Rejection::LeadingZero,
            Rejection::Distribution,
            Rejection::Checksum,
        ]
        .into_iter()
        .map(Into::into)
        .collect();
        assert_eq!(
            names,
            vec![
                "encoding",
                "length",
                "non_digit",
                "leading_zero",
                "distribution",
                "checksum"
            ]
        );
    }
}
