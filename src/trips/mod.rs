//! Trip records and financial derivation.
//!
//! A trip is one recorded job: income, running costs, and the driver
//! settlement. Every derived figure on a trip is recomputed from the raw
//! fields on each save; nothing derived is ever accepted as input.

pub mod calculators;
pub mod models;

// Re-export commonly used items
pub use calculators::{calculate_financials, derive_trip, TripFinancials};
pub use models::{
    DriverPayInput, DriverPayment, Expenses, PaymentMode, PaymentStatus, Trip, TripInput,
};
