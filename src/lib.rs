// src/lib.rs
pub mod auth;
pub mod config;
pub mod database;
pub mod matching;
pub mod question_bank;
pub mod scoring;
pub mod store;
pub mod utils;
pub mod web;

pub use config::ConfigManager;
pub use database::DatabaseConfig;
pub use web::{base_figment, build_rocket, start_web_server, ServerConfig};
