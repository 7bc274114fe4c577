//! Maintenance and compliance deadline evaluation.
//!
//! A due date is classified against a 7-day lookahead window: anything closer
//! than a week out (including today and anything overdue) is urgent. Empty or
//! unparseable dates classify as not urgent - most of those are maintenance
//! types a vehicle simply doesn't track.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::fleet::models::Vehicle;

const MS_PER_DAY: i64 = 86_400_000;

/// Lookahead window; deadlines closer than this many days are urgent
pub const URGENCY_WINDOW_DAYS: i64 = 7;

/// Whole days from `as_of` until midnight of the due date, rounded up.
/// Zero means due today, negative means overdue. `None` when the date
/// string is empty or does not parse as `YYYY-MM-DD`.
pub fn days_until(date: &str, as_of: DateTime<Local>) -> Option<i64> {
    let due = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let midnight = due.and_hms_opt(0, 0, 0)?;
    let due_local = Local.from_local_datetime(&midnight).earliest()?;

    let ms = due_local.signed_duration_since(as_of).num_milliseconds();
    // Ceiling division; integer division already truncates toward zero,
    // which is the ceiling for negative values.
    let days = if ms > 0 && ms % MS_PER_DAY != 0 {
        ms / MS_PER_DAY + 1
    } else {
        ms / MS_PER_DAY
    };
    Some(days)
}

/// Classify a due-date string against the urgency window.
///
/// # Arguments
/// * `date` - due date as `YYYY-MM-DD`; empty or unparseable is not urgent
/// * `as_of` - evaluation instant (default: now)
pub fn is_urgent(date: &str, as_of: Option<DateTime<Local>>) -> bool {
    let now = as_of.unwrap_or_else(Local::now);
    match days_until(date, now) {
        Some(days) => days < URGENCY_WINDOW_DAYS,
        None => false,
    }
}

/// Urgency flags for the deadlines tracked per vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleAlerts {
    pub service_due: bool,
    pub insurance_expiring: bool,
}

impl VehicleAlerts {
    pub fn any(&self) -> bool {
        self.service_due || self.insurance_expiring
    }
}

/// Evaluate the service and insurance deadlines of one vehicle.
pub fn evaluate_vehicle(vehicle: &Vehicle, as_of: Option<DateTime<Local>>) -> VehicleAlerts {
    let now = as_of.unwrap_or_else(Local::now);
    VehicleAlerts {
        service_due: is_urgent(&vehicle.next_service_due_date, Some(now)),
        insurance_expiring: is_urgent(&vehicle.insurance_expiry_date, Some(now)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::models::default_vehicle;

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    // ==================== days_until tests ====================

    #[test]
    fn test_days_until_rounds_up() {
        // Midnight of the 16th is 5.5 days from noon on the 10th
        let days = days_until("2024-03-16", noon(2024, 3, 10));
        assert_eq!(days, Some(6));
    }

    #[test]
    fn test_days_until_today_rounds_to_zero() {
        // Midnight already passed; -0.5 days rounds up to 0
        let days = days_until("2024-03-10", noon(2024, 3, 10));
        assert_eq!(days, Some(0));
    }

    #[test]
    fn test_days_until_overdue() {
        let days = days_until("2024-03-01", noon(2024, 3, 10));
        assert_eq!(days, Some(-9));
    }

    #[test]
    fn test_days_until_unparseable() {
        assert_eq!(days_until("", noon(2024, 3, 10)), None);
        assert_eq!(days_until("not-a-date", noon(2024, 3, 10)), None);
        assert_eq!(days_until("2024-13-40", noon(2024, 3, 10)), None);
    }

    // ==================== is_urgent tests ====================

    #[test]
    fn test_six_days_out_is_urgent() {
        assert!(is_urgent("2024-03-16", Some(noon(2024, 3, 10))));
    }

    #[test]
    fn test_eight_days_out_is_not_urgent() {
        assert!(!is_urgent("2024-03-18", Some(noon(2024, 3, 10))));
    }

    #[test]
    fn test_due_today_is_urgent() {
        assert!(is_urgent("2024-03-10", Some(noon(2024, 3, 10))));
    }

    #[test]
    fn test_overdue_is_urgent() {
        assert!(is_urgent("2024-02-01", Some(noon(2024, 3, 10))));
    }

    #[test]
    fn test_far_future_is_not_urgent() {
        assert!(!is_urgent("2025-01-01", Some(noon(2024, 3, 10))));
    }

    #[test]
    fn test_unparseable_date_is_not_urgent() {
        assert!(!is_urgent("", Some(noon(2024, 3, 10))));
        assert!(!is_urgent("soon", Some(noon(2024, 3, 10))));
    }

    // ==================== evaluate_vehicle tests ====================

    #[test]
    fn test_evaluate_vehicle_flags_independently() {
        let mut vehicle = default_vehicle();
        vehicle.next_service_due_date = "2024-03-12".to_string();
        vehicle.insurance_expiry_date = "2024-08-15".to_string();

        let alerts = evaluate_vehicle(&vehicle, Some(noon(2024, 3, 10)));
        assert!(alerts.service_due);
        assert!(!alerts.insurance_expiring);
        assert!(alerts.any());
    }

    #[test]
    fn test_evaluate_vehicle_empty_dates_are_quiet() {
        let mut vehicle = default_vehicle();
        vehicle.next_service_due_date = String::new();
        vehicle.insurance_expiry_date = String::new();

        let alerts = evaluate_vehicle(&vehicle, Some(noon(2024, 3, 10)));
        assert!(!alerts.any());
    }
}
