//! Regional submission routing.
//!
//! The backend exposes two order-creation paths and the choice is made
//! by a pincode-prefix / city-substring rule. The rule is preserved
//! exactly as observed in production; whether the two documented
//! carve-outs are the complete set is an open product question, so it
//! is kept in this one place and not generalized.

use serde::{Deserialize, Serialize};

/// Which order-creation path to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionVariant {
    /// Default path.
    A,
    /// Regional carve-out path.
    B,
}

impl SubmissionVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionVariant::A => "a",
            SubmissionVariant::B => "b",
        }
    }
}

/// Select the submission variant for a destination.
///
/// Variant B when the pincode starts with `8` or the city matches
/// "patna"/"begusarai" (case-insensitive substring); variant A otherwise.
pub fn variant_for(pincode: &str, city: &str) -> SubmissionVariant {
    let city = city.to_lowercase();
    if pincode.starts_with('8') || city.contains("patna") || city.contains("begusarai") {
        SubmissionVariant::B
    } else {
        SubmissionVariant::A
    }
}
