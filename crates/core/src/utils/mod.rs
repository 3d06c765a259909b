//! Pure helper utilities: currency formatting and input validation.

pub mod currency;
pub mod validation;
