use serde::{Deserialize, Serialize};
use std::fmt;

/// Clamps a raw quantity into the valid range: non-finite and negative
/// values become `0.0`.
pub fn sanitize_quantity(quantity: f64) -> f64 {
    if quantity.is_finite() && quantity > 0.0 {
        quantity
    } else {
        0.0
    }
}

/// A serving multiplier. Always finite and at least one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Servings(f64);

impl Servings {
    pub const ONE: Servings = Servings(1.0);

    /// Builds a serving count, replacing anything below one (or not a
    /// number) with a single serving.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value >= 1.0 {
            Servings(value)
        } else {
            if value != 1.0 {
                tracing::warn!(value, "invalid serving count, falling back to 1");
            }
            Servings::ONE
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// The amount of an ingredient needed for this many servings.
    pub fn scale(self, per_serving: f64) -> f64 {
        sanitize_quantity(per_serving) * self.0
    }
}

impl Default for Servings {
    fn default() -> Self {
        Servings::ONE
    }
}

impl From<f64> for Servings {
    fn from(value: f64) -> Self {
        Servings::new(value)
    }
}

impl From<u32> for Servings {
    fn from(value: u32) -> Self {
        Servings::new(value as f64)
    }
}

impl From<Servings> for f64 {
    fn from(value: Servings) -> Self {
        value.0
    }
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_amount(self.0))
    }
}

/// Formats a quantity without a trailing `.0` for whole numbers.
pub fn format_amount(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
