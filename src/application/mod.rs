// Application layer - Use cases and orchestration
pub mod chart_data;
pub mod parse_service;
pub mod summary;
