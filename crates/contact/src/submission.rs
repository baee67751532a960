use serde::Deserialize;
use validator::Validate;

/// A contact-form payload, alive for a single request.
///
/// `email` is taken verbatim as the auto-reply destination; beyond presence
/// no format validation is applied. Absent fields deserialize as empty
/// strings so that missing and empty input reject the same way.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Submission {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}
