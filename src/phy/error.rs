use thiserror::Error;

/// Reasons a raw input string is rejected before any line coding runs.
///
/// Both kinds are terminal for the request: nothing is encoded when
/// validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Nothing left to encode after trimming surrounding whitespace
    #[error("no input data")]
    EmptyInput,

    /// A character other than `0` or `1` is present
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

impl EncodeError {
    /// Message shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            EncodeError::EmptyInput => {
                "Error: No input data! Please enter binary data (0s and 1s)"
            }
            EncodeError::InvalidSymbol { .. } => {
                "Error: Invalid input! Please enter only 0s and 1s"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EncodeError>;
