//! Stability AI REST API: text-to-image generation and account balance.

pub mod config;
pub mod errors;
pub mod models;
pub mod service;
pub mod structs;
