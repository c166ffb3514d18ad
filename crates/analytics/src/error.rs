use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),

    #[error("Calculation error: value of '{0}' exceeds the representable decimal range")]
    Overflow(String),
}

impl AnalyticsError {
    pub(crate) fn overflow(field: &str) -> Self {
        AnalyticsError::Overflow(field.to_string())
    }
}
