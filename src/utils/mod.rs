pub mod catalog;
pub mod catalog_source;
pub mod config;
pub mod points;
pub mod race_utils;
pub mod session_engine;
pub mod snapshot;
pub mod state;
pub mod stats;
