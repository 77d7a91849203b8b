// In-memory trip store
use crate::application::trip_store::TripStore;
use crate::domain::error::TripError;
use crate::domain::trip::{LocationOutcome, LocationUpdate, TelemetryUpdate, TripRecord, TripSnapshot};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

/// Holds the single trip in flight. State is lost on restart.
///
/// One lock covers both the state and the path, and the clock is read while
/// the lock is held, so commit order and timestamp order agree.
#[derive(Debug)]
pub struct InMemoryTripStore {
    record: Mutex<TripRecord>,
}

impl InMemoryTripStore {
    pub fn new() -> Self {
        Self {
            record: Mutex::new(TripRecord::new()),
        }
    }
}

#[async_trait]
impl TripStore for InMemoryTripStore {
    async fn apply_telemetry(&self, update: TelemetryUpdate) -> Result<(), TripError> {
        let mut record = self.record.lock().await;
        record.apply_telemetry(update, Utc::now())
    }

    async fn apply_location(&self, update: LocationUpdate) -> Result<LocationOutcome, TripError> {
        let mut record = self.record.lock().await;
        record.apply_location(update, Utc::now())
    }

    async fn snapshot(&self) -> TripSnapshot {
        self.record.lock().await.snapshot()
    }

    async fn reset(&self) -> usize {
        let mut record = self.record.lock().await;
        record.reset(Utc::now())
    }
}
