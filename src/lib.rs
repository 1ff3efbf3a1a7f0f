pub mod app;
pub mod configuration;
pub mod connectors;
pub mod console;
pub mod db;
pub mod forms;
pub mod models;
pub mod services;
pub mod telemetry;
