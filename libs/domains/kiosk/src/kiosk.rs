use chrono::{NaiveDateTime, NaiveTime};

use crate::beverage::Beverage;
use crate::error::{KioskError, KioskResult};
use crate::order::Order;

const DEFAULT_OPEN_TIME: NaiveTime = match NaiveTime::from_hms_opt(10, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};
const DEFAULT_CLOSE_TIME: NaiveTime = match NaiveTime::from_hms_opt(22, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// Mutable in-session accumulator of beverage selections.
///
/// The cart keeps beverages in add order and allows duplicates. Orders
/// can only be created inside the business-hours window, half-open
/// `[open, close)`: opening time is orderable, closing time is not.
#[derive(Debug, Clone)]
pub struct CafeKiosk {
    beverages: Vec<Beverage>,
    open_time: NaiveTime,
    close_time: NaiveTime,
}

impl CafeKiosk {
    /// A kiosk with the default 10:00-22:00 window.
    pub fn new() -> Self {
        Self::with_business_hours(DEFAULT_OPEN_TIME, DEFAULT_CLOSE_TIME)
    }

    /// A kiosk with a custom business-hours window.
    pub fn with_business_hours(open_time: NaiveTime, close_time: NaiveTime) -> Self {
        Self {
            beverages: Vec::new(),
            open_time,
            close_time,
        }
    }

    pub fn beverages(&self) -> &[Beverage] {
        &self.beverages
    }

    /// Append `quantity` copies of `beverage` to the cart.
    ///
    /// Fails when `quantity` is zero. No upper bound is enforced.
    pub fn add(&mut self, beverage: Beverage, quantity: usize) -> KioskResult<()> {
        if quantity < 1 {
            return Err(KioskError::InvalidQuantity);
        }

        self.beverages
            .extend(std::iter::repeat_n(beverage, quantity));
        Ok(())
    }

    /// Remove every entry equal to `beverage`. No-op when absent.
    pub fn remove(&mut self, beverage: Beverage) {
        self.beverages.retain(|b| *b != beverage);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.beverages.clear();
    }

    /// Sum of prices over the current cart contents.
    pub fn total_price(&self) -> i64 {
        self.beverages.iter().map(Beverage::price).sum()
    }

    /// Snapshot the cart into an immutable [`Order`] stamped with `now`.
    ///
    /// Fails when `now` falls outside the business-hours window. The cart
    /// is left untouched; a follow-up order from the same session sees
    /// the same contents.
    pub fn create_order(&self, now: NaiveDateTime) -> KioskResult<Order> {
        let time = now.time();
        if time < self.open_time || time >= self.close_time {
            return Err(KioskError::OutsideBusinessHours);
        }

        Ok(Order::new(self.beverages.clone(), now))
    }
}

impl Default for CafeKiosk {
    fn default() -> Self {
        Self::new()
    }
}
