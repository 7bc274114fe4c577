//! Trip record types.
//!
//! Field names serialize in camelCase to stay wire-compatible with the data
//! the app has already stored. Numeric fields deserialize to zero when absent,
//! so a partially filled record never fails to load.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement state of the driver payment. Derived from the balance,
/// never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

/// How the driver was (or will be) paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    Cash,
    Upi,
    BankTransfer,
    Card,
}

impl Default for PaymentMode {
    fn default() -> Self {
        PaymentMode::Cash
    }
}

/// Running costs of a single trip. Fuel quantity is informational only and
/// does not enter the expense total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expenses {
    #[serde(default)]
    pub fuel_cost: Decimal,
    #[serde(default)]
    pub fuel_qty: Decimal,
    #[serde(default)]
    pub toll_charges: Decimal,
    #[serde(default)]
    pub parking_charges: Decimal,
    #[serde(default)]
    pub other_expenses: Decimal,
}

/// Driver settlement attached to a trip. `balance_payable` and
/// `payment_status` are derived; the rest is input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPayment {
    #[serde(default)]
    pub total_driver_pay: Decimal,
    #[serde(default)]
    pub advance_paid: Decimal,
    #[serde(default)]
    pub balance_payable: Decimal,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_mode: PaymentMode,
}

/// One completed or logged job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    /// Trip date as `YYYY-MM-DD`
    pub date: String,
    pub vehicle_id: String,
    pub driver_name: String,
    pub driver_contact: String,
    pub customer_name: String,
    pub customer_contact: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub start_time: String,
    pub end_time: String,
    /// Total trip amount charged to the customer (income)
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub start_odometer: Decimal,
    #[serde(default)]
    pub end_odometer: Decimal,
    pub notes: String,
    pub expenses: Expenses,
    pub driver_payment: DriverPayment,
    // Derived fields, recomputed on every save
    #[serde(default)]
    pub total_expense: Decimal,
    #[serde(default)]
    pub net_profit: Decimal,
    #[serde(default)]
    pub total_distance: Decimal,
}

/// Driver payment input fields (the derived fields are absent here)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPayInput {
    #[serde(default)]
    pub total_driver_pay: Decimal,
    #[serde(default)]
    pub advance_paid: Decimal,
    #[serde(default)]
    pub payment_mode: PaymentMode,
}

/// Raw trip fields as captured by the form. Defaults mirror a blank form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInput {
    pub date: String,
    #[serde(default)]
    pub vehicle_id: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub driver_contact: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_contact: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub drop_location: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub start_odometer: Decimal,
    #[serde(default)]
    pub end_odometer: Decimal,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub expenses: Expenses,
    #[serde(default)]
    pub driver_payment: DriverPayInput,
}
