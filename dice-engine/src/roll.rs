//! Evaluating a [`RollRequest`] and rendering the result line.

use rand::Rng;

use crate::notation::RollRequest;

/// Individual faces in draw order, plus the modified total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    results: Vec<u32>,
    modifier: i32,
    total: i64,
}

impl RollOutcome {
    /// Builds an outcome from already-drawn faces; `total` is their sum plus `modifier`.
    pub fn new(results: Vec<u32>, modifier: i32) -> Self {
        let sum: i64 = results.iter().map(|&r| i64::from(r)).sum();
        Self {
            total: sum + i64::from(modifier),
            results,
            modifier,
        }
    }

    pub fn results(&self) -> &[u32] {
        &self.results
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}

/// Draws `count` faces uniformly from `1..=sides`. The modifier applies to the total only.
pub fn evaluate<R: Rng>(request: &RollRequest, rng: &mut R) -> RollOutcome {
    let results = (0..request.count())
        .map(|_| rng.random_range(1..=request.sides()))
        .collect();
    RollOutcome::new(results, request.modifier())
}

/// `Roll <args>: a + b [+k|-k] [= **total**]`.
///
/// The total is left out only for a single die without modifier.
pub fn format_roll(args: &str, outcome: &RollOutcome) -> String {
    let faces: Vec<String> = outcome.results.iter().map(u32::to_string).collect();
    let mut text = format!("Roll {}: {}", args, faces.join(" + "));

    if outcome.modifier != 0 {
        text.push_str(&format!(" {:+}", outcome.modifier));
    }
    if outcome.modifier != 0 || outcome.results.len() > 1 {
        text.push_str(&format!(" = **{}**", outcome.total));
    }
    text
}
