// Domain layer - Core data model
pub mod chart;
pub mod dataset;
pub mod platform;
pub mod sample;
