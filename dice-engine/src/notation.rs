//! Dice notation parsing: `[count]d<sides>[+|-modifier]`, case-insensitive.
//!
//! Grammar is matched first (any mismatch is [`DiceError::Format`]); the count range and the
//! die size are validated afterwards, in that order.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::DiceError;

/// Smallest number of dice in one roll.
pub const MIN_DICE: u32 = 1;
/// Largest number of dice in one roll.
pub const MAX_DICE: u32 = 100;
/// The tabletop die sizes the bot accepts.
pub const SUPPORTED_SIDES: [u32; 6] = [4, 6, 8, 10, 12, 20];

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static DICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+)?d([0-9]+)([+-][0-9]+)?$").expect("dice pattern is a valid regex")
});

/// A validated roll: `count` dice with `sides` faces, plus a flat `modifier` on the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    count: u32,
    sides: u32,
    modifier: i32,
}

impl RollRequest {
    /// Validates count first, then sides.
    pub fn new(count: u64, sides: u64, modifier: i32) -> Result<Self, DiceError> {
        let count = u32::try_from(count)
            .ok()
            .filter(|c| (MIN_DICE..=MAX_DICE).contains(c))
            .ok_or(DiceError::CountOutOfRange(count))?;
        let sides = u32::try_from(sides)
            .ok()
            .filter(|s| SUPPORTED_SIDES.contains(s))
            .ok_or(DiceError::UnsupportedSides(sides))?;
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }
}

impl fmt::Display for RollRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

impl FromStr for RollRequest {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses and validates a dice expression such as `d20`, `2d6+3` or `4D8-2`.
pub fn parse(text: &str) -> Result<RollRequest, DiceError> {
    let text = text.trim();
    let caps = DICE_PATTERN
        .captures(text)
        .ok_or_else(|| DiceError::Format(text.to_string()))?;

    let count = caps.get(1).map_or(1, |m| parse_saturating(m.as_str()));
    let sides = parse_saturating(&caps[2]);
    let modifier = match caps.get(3) {
        Some(m) => m
            .as_str()
            .parse::<i32>()
            .map_err(|_| DiceError::Format(text.to_string()))?,
        None => 0,
    };

    RollRequest::new(count, sides, modifier)
}

/// Digits matched by the pattern; overflow saturates so range checks still reject the value.
fn parse_saturating(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
