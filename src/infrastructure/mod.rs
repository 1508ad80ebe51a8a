// Infrastructure layer - External formats and configuration
pub mod config;
pub mod payload;
