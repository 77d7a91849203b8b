// Application layer - Trip use cases and the store seam
pub mod trip_service;
pub mod trip_store;
