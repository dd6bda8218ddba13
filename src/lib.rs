pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod http_client;
pub mod models;
