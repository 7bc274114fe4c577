//! Dashboard aggregation over the trip collection.
//!
//! Every figure here is recomputed from the canonical collection on each
//! call - nothing is cached or persisted, so the dashboard can never drift
//! from the stored trips. The recent windows sort by trip date explicitly
//! rather than trusting insertion order.

use std::cmp::Reverse;

use chrono::{DateTime, Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::trips::models::{PaymentStatus, Trip};

/// Chart series length: the 7 most recent trips
pub const ACTIVITY_WINDOW: usize = 7;

/// Quick-display list length: the 5 most recent trips
pub const RECENT_TRIPS_WINDOW: usize = 5;

/// Month-scoped totals plus the all-time pending driver payable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub monthly_income: Decimal,
    pub monthly_expense: Decimal,
    pub monthly_net_profit: Decimal,
    pub pending_driver_payable: Decimal,
}

/// One entry of the recent-activity chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityPoint {
    /// Human date label, e.g. "Mar 5"
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
}

fn parse_trip_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Trips ordered newest first; unparseable dates sort last, ties keep
/// their stored order.
fn newest_first(trips: &[Trip]) -> Vec<&Trip> {
    let mut ordered: Vec<&Trip> = trips.iter().collect();
    ordered.sort_by_key(|t| Reverse(parse_trip_date(&t.date)));
    ordered
}

/// Compute the dashboard totals from the full trip collection.
///
/// Monthly figures cover trips dated in the calendar month of `as_of`
/// (default: now, local calendar); a trip whose date does not parse belongs
/// to no month. Pending driver payable spans the entire collection.
pub fn summarize(trips: &[Trip], as_of: Option<DateTime<Local>>) -> DashboardSummary {
    let today = as_of.unwrap_or_else(Local::now).date_naive();

    let mut monthly_income = Decimal::ZERO;
    let mut monthly_expense = Decimal::ZERO;
    let mut pending_driver_payable = Decimal::ZERO;

    for trip in trips {
        if let Some(date) = parse_trip_date(&trip.date) {
            if date.month() == today.month() && date.year() == today.year() {
                monthly_income += trip.total_amount;
                monthly_expense += trip.total_expense;
            }
        }
        if trip.driver_payment.payment_status == PaymentStatus::Pending {
            pending_driver_payable += trip.driver_payment.balance_payable;
        }
    }

    DashboardSummary {
        monthly_income,
        monthly_expense,
        monthly_net_profit: monthly_income - monthly_expense,
        pending_driver_payable,
    }
}

/// The recent-activity chart series: the 7 newest trips in chronological
/// order, one point per trip.
pub fn recent_activity(trips: &[Trip]) -> Vec<ActivityPoint> {
    let mut window: Vec<&Trip> = newest_first(trips)
        .into_iter()
        .take(ACTIVITY_WINDOW)
        .collect();
    window.reverse();

    window
        .into_iter()
        .map(|trip| ActivityPoint {
            label: match parse_trip_date(&trip.date) {
                Some(date) => date.format("%b %-d").to_string(),
                None => trip.date.clone(),
            },
            income: trip.total_amount,
            expense: trip.total_expense,
            profit: trip.net_profit,
        })
        .collect()
}

/// The 5 newest trips, for quick display.
pub fn recent_trips(trips: &[Trip]) -> Vec<Trip> {
    newest_first(trips)
        .into_iter()
        .take(RECENT_TRIPS_WINDOW)
        .cloned()
        .collect()
}
