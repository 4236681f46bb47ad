use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One grouped holding row within an asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub sub_category: String,
    pub amount: f64,
}

/// Customer holdings grouped by asset class, kept in the order the
/// analytical query produced them (asset class, then sub-category).
/// Serializes as a JSON object preserving that order.
pub type Portfolio = IndexMap<String, Vec<Holding>>;
