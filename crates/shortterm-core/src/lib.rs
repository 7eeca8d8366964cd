//! shortterm-core — Trial engine, scoring, and result storage.
//!
//! This crate defines the data model, the trial loop, and the persisted
//! history that every shortterm frontend builds on.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod mock;
pub mod model;
pub mod parser;
pub mod scorer;
pub mod statistics;
pub mod store;
pub mod traits;
