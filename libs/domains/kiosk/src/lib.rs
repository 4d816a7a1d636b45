//! Kiosk Domain
//!
//! The in-session cart/order aggregate: a [`CafeKiosk`] accumulates
//! [`Beverage`] selections, validates quantity and business-hours
//! constraints, computes totals, and snapshots itself into an immutable
//! [`Order`] at checkout.
//!
//! This crate is pure domain logic: no I/O, no async. A kiosk belongs to
//! exactly one session and is discarded after checkout.

pub mod beverage;
pub mod error;
pub mod kiosk;
pub mod order;

pub use beverage::Beverage;
pub use error::{KioskError, KioskResult};
pub use kiosk::CafeKiosk;
pub use order::Order;
