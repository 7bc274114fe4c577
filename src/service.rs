//! Coordinating service over the owned collections.
//!
//! `FleetOps` is the single owner of the in-memory trip and vehicle lists
//! and the only caller of the store. Every mutation re-derives the trip's
//! financial fields and flushes the whole collection, in that order, so the
//! stored records can never carry stale derived values.

use chrono::{DateTime, Local};
use tracing::{debug, info};
use uuid::Uuid;

use crate::dashboard::{self, ActivityPoint, DashboardSummary};
use crate::error::Result;
use crate::fleet::maintenance::{evaluate_vehicle, VehicleAlerts};
use crate::fleet::models::{Vehicle, VehicleInput};
use crate::store::{FleetStore, KvStore};
use crate::trips::calculators::derive_trip;
use crate::trips::models::{Trip, TripInput};

/// Owns the trip and vehicle collections and their persistence
pub struct FleetOps<S: KvStore> {
    store: FleetStore<S>,
    trips: Vec<Trip>,
    vehicles: Vec<Vehicle>,
}

impl<S: KvStore> FleetOps<S> {
    /// Load both collections from the store. The vehicle collection seeds
    /// its default record on a fresh store.
    pub fn open(kv: S) -> Result<Self> {
        let store = FleetStore::new(kv);
        let trips = store.load_trips()?;
        let vehicles = store.load_vehicles()?;
        info!(
            trips = trips.len(),
            vehicles = vehicles.len(),
            "fleet state loaded"
        );

        Ok(Self {
            store,
            trips,
            vehicles,
        })
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicle by id. A trip may reference a removed vehicle; that lookup
    /// returns `None` and the caller shows the absence, it is not an error.
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Save a trip from raw input. Passing the id of an existing trip
    /// replaces it wholesale (the id is kept); otherwise a new trip is
    /// appended under a fresh id. Derived fields are recomputed here on
    /// every save.
    pub fn save_trip(&mut self, input: TripInput, existing_id: Option<&str>) -> Result<Trip> {
        let trip = derive_trip(input, existing_id);

        match self.trips.iter_mut().find(|t| t.id == trip.id) {
            Some(slot) => {
                *slot = trip.clone();
                debug!(id = %trip.id, "trip replaced");
            }
            None => {
                self.trips.push(trip.clone());
                debug!(id = %trip.id, "trip added");
            }
        }

        self.store.save_trips(&self.trips)?;
        Ok(trip)
    }

    /// Add a vehicle under a generated id.
    pub fn add_vehicle(&mut self, input: VehicleInput) -> Result<Vehicle> {
        let vehicle = input.into_vehicle(Uuid::new_v4().to_string());
        self.vehicles.push(vehicle.clone());
        self.store.save_vehicles(&self.vehicles)?;
        debug!(id = %vehicle.id, registration = %vehicle.registration_number, "vehicle added");
        Ok(vehicle)
    }

    /// Remove a vehicle by id. An unknown id is a no-op; trips referencing
    /// the removed vehicle keep their dangling reference.
    pub fn remove_vehicle(&mut self, id: &str) -> Result<()> {
        self.vehicles.retain(|v| v.id != id);
        self.store.save_vehicles(&self.vehicles)?;
        debug!(id, "vehicle removed");
        Ok(())
    }

    /// Dashboard totals recomputed from the current collection.
    pub fn dashboard_summary(&self, as_of: Option<DateTime<Local>>) -> DashboardSummary {
        dashboard::summarize(&self.trips, as_of)
    }

    /// Recent-activity chart series (7 newest trips, chronological).
    pub fn recent_activity(&self) -> Vec<ActivityPoint> {
        dashboard::recent_activity(&self.trips)
    }

    /// The 5 newest trips for quick display.
    pub fn recent_trips(&self) -> Vec<Trip> {
        dashboard::recent_trips(&self.trips)
    }

    /// Maintenance urgency flags for every vehicle, keyed by vehicle id.
    pub fn fleet_alerts(&self, as_of: Option<DateTime<Local>>) -> Vec<(String, VehicleAlerts)> {
        let now = as_of.unwrap_or_else(Local::now);
        self.vehicles
            .iter()
            .map(|v| (v.id.clone(), evaluate_vehicle(v, Some(now))))
            .collect()
    }
}
