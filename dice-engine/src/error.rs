//! Error types for dice notation.
//!
//! Every variant is recoverable: the dispatcher turns it into a corrective reply via
//! [`DiceError::user_message`].

use thiserror::Error;

/// Why a `/roll` expression was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    /// Text does not match `[count]d<sides>[+|-modifier]`.
    #[error("Invalid dice notation: {0:?}")]
    Format(String),

    /// Resolved dice count is outside 1..=100. Counts too large to parse saturate to `u64::MAX`.
    #[error("Dice count out of range: {0}")]
    CountOutOfRange(u64),

    /// Die size is not one of d4, d6, d8, d10, d12, d20.
    #[error("Unsupported die: d{0}")]
    UnsupportedSides(u64),
}

impl DiceError {
    /// Text sent back to the chat when a roll is rejected.
    pub fn user_message(&self) -> &'static str {
        match self {
            DiceError::Format(_) => "Invalid format. Examples:\n/roll d20\n/roll 2d6+5\n/roll 4d8-2",
            DiceError::CountOutOfRange(_) => "Dice count must be between 1 and 100.",
            DiceError::UnsupportedSides(_) => "Supported dice: d4, d6, d8, d10, d12, d20.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_lists_examples() {
        let msg = DiceError::Format("abc".to_string()).user_message();
        assert!(msg.starts_with("Invalid format."));
        assert!(msg.contains("/roll 2d6+5"));
    }

    #[test]
    fn test_range_and_sides_messages() {
        assert_eq!(
            DiceError::CountOutOfRange(0).user_message(),
            "Dice count must be between 1 and 100."
        );
        assert_eq!(
            DiceError::UnsupportedSides(7).user_message(),
            "Supported dice: d4, d6, d8, d10, d12, d20."
        );
    }
}
