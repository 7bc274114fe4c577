//! Persistence for the two record collections.
//!
//! Storage is a plain key-value capability: each collection is one
//! serialized JSON document under a fixed key, replaced wholesale on every
//! save. Corrupt stored data is discarded with a warning rather than
//! surfaced as a fatal error, so one bad write never bricks the app.

pub mod json_file;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::fleet::models::{default_vehicle, Vehicle};
use crate::trips::models::Trip;

pub use json_file::JsonFileStore;

/// Storage key for the trip collection
pub const TRIPS_KEY: &str = "trips";

/// Storage key for the vehicle collection
pub const VEHICLES_KEY: &str = "vehicles";

/// Minimal key-value capability the engine persists through
pub trait KvStore {
    /// Previously stored value for `key`, or `None` if never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the stored value for `key`
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// Typed load/save layer over a key-value store
pub struct FleetStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> FleetStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Load the trip collection; empty when nothing was saved yet.
    pub fn load_trips(&self) -> Result<Vec<Trip>> {
        Ok(self.load_collection(TRIPS_KEY)?.unwrap_or_default())
    }

    /// Replace the stored trip collection.
    pub fn save_trips(&self, trips: &[Trip]) -> Result<()> {
        self.save_collection(TRIPS_KEY, trips)
    }

    /// Load the vehicle collection, seeding the default vehicle when nothing
    /// was ever saved. An explicitly saved empty list stays empty.
    pub fn load_vehicles(&self) -> Result<Vec<Vehicle>> {
        Ok(self
            .load_collection(VEHICLES_KEY)?
            .unwrap_or_else(|| vec![default_vehicle()]))
    }

    /// Replace the stored vehicle collection.
    pub fn save_vehicles(&self, vehicles: &[Vehicle]) -> Result<()> {
        self.save_collection(VEHICLES_KEY, vehicles)
    }

    /// `None` means the key was never written, or held data that no longer
    /// deserializes (logged and discarded).
    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        let Some(raw) = self.kv.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(Some(records)),
            Err(e) => {
                warn!(key, error = %e, "discarding corrupt stored collection");
                Ok(None)
            }
        }
    }

    fn save_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.kv.put(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::calculators::derive_trip;
    use crate::trips::models::TripInput;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    fn temp_store() -> (FleetStore<JsonFileStore>, PathBuf) {
        let dir = std::env::temp_dir().join(format!("navexa-store-{}", uuid::Uuid::new_v4()));
        let store = FleetStore::new(JsonFileStore::new(&dir).unwrap());
        (store, dir)
    }

    fn sample_trip(date: &str) -> Trip {
        let mut input = TripInput {
            date: date.to_string(),
            total_amount: dec!(500.50),
            ..Default::default()
        };
        input.expenses.fuel_cost = dec!(50.25);
        input.driver_payment.total_driver_pay = dec!(100);
        derive_trip(input, None)
    }

    // ==================== round-trip tests ====================

    #[test]
    fn test_trips_round_trip_empty_one_many() {
        let (store, dir) = temp_store();

        for count in [0usize, 1, 12] {
            let trips: Vec<Trip> = (0..count)
                .map(|i| sample_trip(&format!("2024-03-{:02}", i + 1)))
                .collect();
            store.save_trips(&trips).unwrap();
            assert_eq!(store.load_trips().unwrap(), trips);
        }

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_vehicles_round_trip_preserves_empty_dates() {
        let (store, dir) = temp_store();

        let mut vehicle = default_vehicle();
        vehicle.tyre_change_date = String::new();
        vehicle.pollution_expiry_date = String::new();
        let vehicles = vec![vehicle];

        store.save_vehicles(&vehicles).unwrap();
        let loaded = store.load_vehicles().unwrap();
        assert_eq!(loaded, vehicles);
        assert_eq!(loaded[0].tyre_change_date, "");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_save_replaces_whole_collection() {
        let (store, dir) = temp_store();

        store
            .save_trips(&[sample_trip("2024-03-01"), sample_trip("2024-03-02")])
            .unwrap();
        store.save_trips(&[sample_trip("2024-03-03")]).unwrap();

        let loaded = store.load_trips().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].date, "2024-03-03");

        std::fs::remove_dir_all(dir).unwrap();
    }

    // ==================== seeding tests ====================

    #[test]
    fn test_vehicles_seed_default_on_first_load() {
        let (store, dir) = temp_store();

        let vehicles = store.load_vehicles().unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].id, "v1");
        assert_eq!(vehicles[0].registration_number, "AB-123-CD");
        assert_eq!(vehicles[0].make_model, "Toyota Sienna 2022");
        assert_eq!(vehicles[0].next_service_due_date, "2024-04-01");
        assert_eq!(vehicles[0].insurance_expiry_date, "2024-08-15");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_saved_empty_vehicle_list_stays_empty() {
        let (store, dir) = temp_store();

        store.save_vehicles(&[]).unwrap();
        assert!(store.load_vehicles().unwrap().is_empty());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_trips_load_empty_without_seed() {
        let (store, dir) = temp_store();
        assert!(store.load_trips().unwrap().is_empty());
        std::fs::remove_dir_all(dir).unwrap();
    }

    // ==================== corrupt-data tests ====================

    #[test]
    fn test_corrupt_trips_fall_back_to_empty() {
        let (store, dir) = temp_store();

        store.kv.put(TRIPS_KEY, "{not json").unwrap();
        assert!(store.load_trips().unwrap().is_empty());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_corrupt_vehicles_fall_back_to_seed() {
        let (store, dir) = temp_store();

        store.kv.put(VEHICLES_KEY, "[{\"id\": 42}]").unwrap();
        let vehicles = store.load_vehicles().unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].id, "v1");

        std::fs::remove_dir_all(dir).unwrap();
    }
}
