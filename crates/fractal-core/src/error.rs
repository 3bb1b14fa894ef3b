use thiserror::Error;

/// Errors raised when the control surface hands the core a parameter it
/// cannot interpret. The evaluators themselves never fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
    #[error("value `{value}` for `{key}` is not a number")]
    NotANumber { key: &'static str, value: String },
}
