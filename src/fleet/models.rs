//! Fleet vehicle types.
//!
//! Maintenance dates are free-form `YYYY-MM-DD` strings and several are
//! legitimately empty - not every vehicle tracks every service type. Nothing
//! derived is stored on a vehicle; urgency is computed at read time.

use serde::{Deserialize, Serialize};

/// One fleet vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub registration_number: String,
    pub make_model: String,
    #[serde(default)]
    pub last_service_date: String,
    #[serde(default)]
    pub next_service_due_date: String,
    #[serde(default)]
    pub oil_change_date: String,
    #[serde(default)]
    pub tyre_change_date: String,
    #[serde(default)]
    pub brake_service_date: String,
    #[serde(default)]
    pub battery_replacement_date: String,
    #[serde(default)]
    pub insurance_expiry_date: String,
    #[serde(default)]
    pub pollution_expiry_date: String,
}

/// Vehicle fields captured by the add-vehicle form
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInput {
    pub registration_number: String,
    pub make_model: String,
    #[serde(default)]
    pub last_service_date: String,
    #[serde(default)]
    pub next_service_due_date: String,
    #[serde(default)]
    pub insurance_expiry_date: String,
}

impl VehicleInput {
    /// Build the full vehicle record under the given id. The secondary
    /// maintenance dates start out empty and are filled in later.
    pub fn into_vehicle(self, id: String) -> Vehicle {
        Vehicle {
            id,
            registration_number: self.registration_number,
            make_model: self.make_model,
            last_service_date: self.last_service_date,
            next_service_due_date: self.next_service_due_date,
            oil_change_date: String::new(),
            tyre_change_date: String::new(),
            brake_service_date: String::new(),
            battery_replacement_date: String::new(),
            insurance_expiry_date: self.insurance_expiry_date,
            pollution_expiry_date: String::new(),
        }
    }
}

/// The vehicle seeded on first run, before anything was ever saved
pub fn default_vehicle() -> Vehicle {
    Vehicle {
        id: "v1".to_string(),
        registration_number: "AB-123-CD".to_string(),
        make_model: "Toyota Sienna 2022".to_string(),
        last_service_date: "2023-10-01".to_string(),
        next_service_due_date: "2024-04-01".to_string(),
        oil_change_date: "2023-10-01".to_string(),
        tyre_change_date: String::new(),
        brake_service_date: String::new(),
        battery_replacement_date: String::new(),
        insurance_expiry_date: "2024-08-15".to_string(),
        pollution_expiry_date: String::new(),
    }
}
