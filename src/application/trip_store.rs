// Store trait for trip state access
use crate::domain::error::TripError;
use crate::domain::trip::{LocationOutcome, LocationUpdate, TelemetryUpdate, TripSnapshot};
use async_trait::async_trait;

/// Sole owner of the trip state and its path log.
///
/// Each call is one atomic unit: implementations must never let a reader
/// observe half of an update, and must apply concurrent calls in some total order.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Update speed and/or distance, stamping the trip start on first use
    async fn apply_telemetry(&self, update: TelemetryUpdate) -> Result<(), TripError>;

    /// Move the current position and append it to the path
    async fn apply_location(&self, update: LocationUpdate) -> Result<LocationOutcome, TripError>;

    /// Consistent copy of the current state and full path
    async fn snapshot(&self) -> TripSnapshot;

    /// Zero the distance, clear the path and restart the trip clock.
    /// Returns how many path samples were discarded.
    async fn reset(&self) -> usize;
}
