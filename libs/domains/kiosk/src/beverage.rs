use serde::{Deserialize, Serialize};

/// A fixed-price, fixed-name orderable item.
///
/// The menu is a closed set of variants rather than an open trait
/// hierarchy; a beverage is a value, cheap to copy, and two entries of
/// the same variant compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Beverage {
    Americano,
    Latte,
}

impl Beverage {
    pub fn name(&self) -> &'static str {
        match self {
            Beverage::Americano => "americano",
            Beverage::Latte => "latte",
        }
    }

    /// Price in the smallest currency unit.
    pub fn price(&self) -> i64 {
        match self {
            Beverage::Americano => 4000,
            Beverage::Latte => 4500,
        }
    }
}
