//! Synthetic person record generator.
//!
//! Builds person records for a fixed set of locales and writes them to disk
//! as a single JSON array.

pub mod commands;
pub mod error;
pub mod generator;
pub mod locale;
pub mod models;
pub mod output;
pub mod provider;
