//! Workout input packets and their sources.
//!
//! A packet is the raw `(code, values)` pair as produced by the sensor
//! side. Packets come either from the built-in sample list or from a JSON
//! file supplied by the user.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One raw workout input: an activity code plus its ordered raw values
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPacket {
    pub code: String,
    pub values: Vec<f64>,
}

/// The fixed sample inputs used for verification runs.
pub fn sample_packets() -> Vec<WorkoutPacket> {
    vec![
        WorkoutPacket {
            code: "SWM".into(),
            values: vec![720.0, 1.0, 80.0, 25.0, 40.0],
        },
        WorkoutPacket {
            code: "RUN".into(),
            values: vec![15000.0, 1.0, 75.0],
        },
        WorkoutPacket {
            code: "WLK".into(),
            values: vec![9000.0, 1.0, 75.0, 180.0],
        },
    ]
}

/// Load workout packets from a JSON file.
///
/// The file holds a JSON array of `{"code": ..., "values": [...]}` objects.
/// A missing or malformed file is an error: unlike optional signals, an
/// explicitly requested input must parse.
pub fn load_packets(path: &Path) -> Result<Vec<WorkoutPacket>> {
    let contents = std::fs::read_to_string(path)?;
    let packets: Vec<WorkoutPacket> = serde_json::from_str(&contents)?;

    tracing::info!("Loaded {} packets from {:?}", packets.len(), path);
    Ok(packets)
}
