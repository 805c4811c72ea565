pub mod commands;
pub mod config;
pub mod logging;
pub mod models;
pub mod plan;
pub mod validation;
