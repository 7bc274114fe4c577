//! Core trip derivation functions.
//!
//! Pure functions for the financial math - no storage access, no clock.
//! The same derivation runs on every save, so a stored trip can never carry
//! derived figures that disagree with its raw fields.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::trips::models::{DriverPayment, PaymentStatus, Trip, TripInput};

/// Derived financial figures for one trip
#[derive(Debug, Clone, PartialEq)]
pub struct TripFinancials {
    pub total_expense: Decimal,
    pub net_profit: Decimal,
    pub total_distance: Decimal,
    pub balance_payable: Decimal,
    pub payment_status: PaymentStatus,
}

/// Derive the financial figures from a trip's raw fields.
///
/// Rules, in order:
/// 1. total expense = fuel + tolls + parking + other + driver pay
///    (fuel quantity never enters the total)
/// 2. net profit = income - total expense (may be negative, no floor)
/// 3. distance = end odometer - start odometer (odometer ordering is not
///    validated; inconsistent readings come back negative)
/// 4. balance payable = driver pay - advance (negative means overpayment,
///    not clamped)
/// 5. status is PAID when the balance is zero or less, else PENDING
pub fn calculate_financials(input: &TripInput) -> TripFinancials {
    let expenses = &input.expenses;
    let driver = &input.driver_payment;

    let total_expense = expenses.fuel_cost
        + expenses.toll_charges
        + expenses.parking_charges
        + expenses.other_expenses
        + driver.total_driver_pay;

    let net_profit = input.total_amount - total_expense;

    let total_distance = input.end_odometer - input.start_odometer;

    let balance_payable = driver.total_driver_pay - driver.advance_paid;
    let payment_status = if balance_payable <= Decimal::ZERO {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Pending
    };

    TripFinancials {
        total_expense,
        net_profit,
        total_distance,
        balance_payable,
        payment_status,
    }
}

/// Build a full trip record from raw input.
///
/// A new id is generated on first creation; an edit passes the existing id
/// and keeps it unchanged. The derived fields are always freshly computed
/// here - callers must never patch them afterwards.
pub fn derive_trip(input: TripInput, existing_id: Option<&str>) -> Trip {
    let financials = calculate_financials(&input);
    let id = match existing_id {
        Some(id) => id.to_string(),
        None => Uuid::new_v4().to_string(),
    };

    Trip {
        id,
        date: input.date,
        vehicle_id: input.vehicle_id,
        driver_name: input.driver_name,
        driver_contact: input.driver_contact,
        customer_name: input.customer_name,
        customer_contact: input.customer_contact,
        pickup_location: input.pickup_location,
        drop_location: input.drop_location,
        start_time: input.start_time,
        end_time: input.end_time,
        total_amount: input.total_amount,
        start_odometer: input.start_odometer,
        end_odometer: input.end_odometer,
        notes: input.notes,
        expenses: input.expenses,
        driver_payment: DriverPayment {
            total_driver_pay: input.driver_payment.total_driver_pay,
            advance_paid: input.driver_payment.advance_paid,
            balance_payable: financials.balance_payable,
            payment_status: financials.payment_status,
            payment_mode: input.driver_payment.payment_mode,
        },
        total_expense: financials.total_expense,
        net_profit: financials.net_profit,
        total_distance: financials.total_distance,
    }
}
