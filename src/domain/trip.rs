// Trip domain model
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::error::TripError;

/// Latest readings for the trip currently in flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripState {
    pub speed: f64,
    pub distance: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: Option<DateTime<Utc>>,
    pub is_moving: bool,
    pub trip_start_time: Option<DateTime<Utc>>,
}

/// Position sample recorded when a location update is accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSample {
    pub lat: f64,
    pub lng: f64,
    pub speed: f64,
    pub time: DateTime<Utc>,
}

/// Point-in-time copy of the trip, as served to viewers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripSnapshot {
    pub current: TripState,
    pub path: Vec<PathSample>,
}

/// Speed/distance reading pushed by the sensor unit. Absent fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TelemetryUpdate {
    pub speed: Option<f64>,
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocationUpdate {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOutcome {
    Recorded,
    /// One or both coordinates were missing; nothing changed.
    Ignored,
}

impl TelemetryUpdate {
    pub fn validate(&self) -> Result<(), TripError> {
        if self.speed.is_none() && self.distance.is_none() {
            return Err(TripError::NoData);
        }
        if let Some(speed) = self.speed {
            check_non_negative("speed", speed)?;
        }
        if let Some(distance) = self.distance {
            check_non_negative("distance", distance)?;
        }
        Ok(())
    }
}

impl LocationUpdate {
    pub fn validate(&self) -> Result<(), TripError> {
        if let Some(lat) = self.latitude {
            check_finite("latitude", lat)?;
        }
        if let Some(lon) = self.longitude {
            check_finite("longitude", lon)?;
        }
        Ok(())
    }

    /// Both coordinates, if the update carries a full position.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), TripError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TripError::InvalidField {
            field,
            reason: format!("{value} is not a finite number"),
        })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), TripError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(TripError::InvalidField {
            field,
            reason: format!("{value} is negative"),
        });
    }
    Ok(())
}

/// Trip state together with its path log. Every mutation goes through the
/// methods below so `is_moving` and the path never drift from the stored values.
#[derive(Debug, Clone, Default)]
pub struct TripRecord {
    state: TripState,
    path: Vec<PathSample>,
}

impl TripRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TripState {
        &self.state
    }

    pub fn path(&self) -> &[PathSample] {
        &self.path
    }

    pub fn apply_telemetry(
        &mut self,
        update: TelemetryUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), TripError> {
        update.validate()?;

        if self.state.trip_start_time.is_none() {
            self.state.trip_start_time = Some(now);
        }
        if let Some(speed) = update.speed {
            self.state.speed = speed;
        }
        if let Some(distance) = update.distance {
            self.state.distance = distance;
        }
        self.state.timestamp = Some(now);
        self.state.is_moving = self.state.speed > 0.0;
        Ok(())
    }

    pub fn apply_location(
        &mut self,
        update: LocationUpdate,
        now: DateTime<Utc>,
    ) -> Result<LocationOutcome, TripError> {
        update.validate()?;

        let Some((lat, lng)) = update.position() else {
            return Ok(LocationOutcome::Ignored);
        };

        self.state.latitude = lat;
        self.state.longitude = lng;
        self.path.push(PathSample {
            lat,
            lng,
            speed: self.state.speed,
            time: now,
        });
        Ok(LocationOutcome::Recorded)
    }

    /// Start a new trip cycle in place. Speed, position and `timestamp` are kept.
    ///
    /// The start time never moves backwards, even if the wall clock does.
    /// Returns the number of path samples discarded.
    pub fn reset(&mut self, now: DateTime<Utc>) -> usize {
        let start = self.state.trip_start_time.map_or(now, |prev| prev.max(now));
        let discarded = self.path.len();

        self.state.distance = 0.0;
        self.state.trip_start_time = Some(start);
        self.path.clear();
        discarded
    }

    pub fn snapshot(&self) -> TripSnapshot {
        TripSnapshot {
            current: self.state.clone(),
            path: self.path.clone(),
        }
    }
}
