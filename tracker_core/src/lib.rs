#![forbid(unsafe_code)]

//! Core domain model and business logic for the fittrack system.
//!
//! This crate provides:
//! - Domain types (workout records, summaries)
//! - Metric formulas (distance, mean speed, calories) per activity
//! - Packet dispatch and input loading
//! - Summary rendering and the batch report driver

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod report;
pub mod dispatch;
pub mod packet;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use dispatch::read_packet;
pub use packet::{load_packets, sample_packets, WorkoutPacket};
pub use report::run_report;
