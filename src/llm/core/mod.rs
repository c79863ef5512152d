//! Core abstractions for the answer provider layer

pub mod config;
pub mod error;
pub mod provider;
pub mod types;
