// Domain layer - Trip state model and update rules
pub mod error;
pub mod trip;
