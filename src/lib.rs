pub mod aggregator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod fallback;
pub mod models;
pub mod normalize;
pub mod server;
pub mod services;
