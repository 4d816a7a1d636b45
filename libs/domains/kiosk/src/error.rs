use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KioskError {
    #[error("a beverage must be ordered in a quantity of at least one")]
    InvalidQuantity,

    #[error("not currently within orderable hours; contact an administrator")]
    OutsideBusinessHours,
}

pub type KioskResult<T> = Result<T, KioskError>;
