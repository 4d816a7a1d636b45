use chrono::NaiveDateTime;
use serde::Serialize;

use crate::beverage::Beverage;

/// Immutable snapshot of a completed cart at a point in time.
///
/// Only constructible through [`CafeKiosk::create_order`]; never mutated
/// after creation.
///
/// [`CafeKiosk::create_order`]: crate::kiosk::CafeKiosk::create_order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    beverages: Vec<Beverage>,
    ordered_at: NaiveDateTime,
}

impl Order {
    pub(crate) fn new(beverages: Vec<Beverage>, ordered_at: NaiveDateTime) -> Self {
        Self {
            beverages,
            ordered_at,
        }
    }

    pub fn beverages(&self) -> &[Beverage] {
        &self.beverages
    }

    pub fn ordered_at(&self) -> NaiveDateTime {
        self.ordered_at
    }

    /// Sum of beverage prices in the snapshot.
    pub fn total_price(&self) -> i64 {
        self.beverages.iter().map(Beverage::price).sum()
    }
}
