// Trip service - Use cases for ingesting telemetry and serving trip status
use crate::application::trip_store::TripStore;
use crate::domain::error::TripError;
use crate::domain::trip::{LocationOutcome, LocationUpdate, TelemetryUpdate, TripSnapshot};
use std::sync::Arc;

#[derive(Clone)]
pub struct TripService {
    store: Arc<dyn TripStore>,
}

impl TripService {
    pub fn new(store: Arc<dyn TripStore>) -> Self {
        Self { store }
    }

    pub async fn record_telemetry(&self, update: TelemetryUpdate) -> Result<(), TripError> {
        self.store.apply_telemetry(update).await?;
        tracing::debug!(
            speed = ?update.speed,
            distance = ?update.distance,
            "Telemetry applied"
        );
        Ok(())
    }

    pub async fn record_location(&self, update: LocationUpdate) -> Result<LocationOutcome, TripError> {
        let outcome = self.store.apply_location(update).await?;
        match outcome {
            LocationOutcome::Recorded => tracing::debug!(
                latitude = ?update.latitude,
                longitude = ?update.longitude,
                "Location recorded"
            ),
            LocationOutcome::Ignored => tracing::warn!(
                latitude = ?update.latitude,
                longitude = ?update.longitude,
                "Location update missing a coordinate, ignoring"
            ),
        }
        Ok(outcome)
    }

    pub async fn status(&self) -> TripSnapshot {
        self.store.snapshot().await
    }

    pub async fn reset_trip(&self) {
        let discarded = self.store.reset().await;
        tracing::info!(discarded_samples = discarded, "Trip reset");
    }
}
