// SpaceAPI document model
pub mod schema;

// Upstream lab state sources
pub mod upstream;

// Lab state → document translation
pub mod translator;

// HTTP API
pub mod api;

// Configuration loading
pub mod config;
