//! Summary rendering and the batch report driver.
//!
//! Rendering is fixed-point with exactly three decimals and no locale
//! handling. The driver takes the packet list and the output sink as
//! parameters so callers (and tests) control both.

use crate::{read_packet, Result, Summary, WorkoutPacket};
use std::io::Write;

impl Summary {
    /// Render the summary as a single report line.
    pub fn render(&self) -> String {
        format!(
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_type,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}

/// Dispatch, summarize, and print each packet in input order.
///
/// Writes one rendered line per packet. The first dispatch failure aborts
/// the run; already-written lines stay written.
pub fn run_report<W: Write>(packets: &[WorkoutPacket], out: &mut W) -> Result<()> {
    for packet in packets {
        let workout = read_packet(&packet.code, &packet.values)?;
        let summary = workout.summary();
        tracing::debug!(
            "Rendered {} summary from packet {:?}",
            summary.workout_type,
            packet.code
        );
        writeln!(out, "{}", summary.render())?;
    }
    Ok(())
}
