//! Core domain types for the fittrack system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Workout records for the three supported activities
//! - The rendered-once summary value

use serde::{Deserialize, Serialize};

/// A single recorded workout session.
///
/// The variant set is closed: each activity carries its own complete field
/// set, and each supplies its own full formula set in [`crate::metrics`].
/// Records are read-only after construction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Workout {
    /// Running: distance from step count
    Running {
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
    },
    /// Sports walking: calorie formula additionally needs the walker's height
    Walking {
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    /// Swimming: speed comes from pool geometry, not from stroke count
    Swimming {
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    },
}

impl Workout {
    /// Human-readable activity name used in summaries
    pub fn kind_name(&self) -> &'static str {
        match self {
            Workout::Running { .. } => "Running",
            Workout::Walking { .. } => "Walking",
            Workout::Swimming { .. } => "Swimming",
        }
    }

    /// Step or stroke count for this session
    pub fn action_count(&self) -> u32 {
        match self {
            Workout::Running { action_count, .. }
            | Workout::Walking { action_count, .. }
            | Workout::Swimming { action_count, .. } => *action_count,
        }
    }

    /// Session duration in hours
    pub fn duration_h(&self) -> f64 {
        match self {
            Workout::Running { duration_h, .. }
            | Workout::Walking { duration_h, .. }
            | Workout::Swimming { duration_h, .. } => *duration_h,
        }
    }

    /// Athlete weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        match self {
            Workout::Running { weight_kg, .. }
            | Workout::Walking { weight_kg, .. }
            | Workout::Swimming { weight_kg, .. } => *weight_kg,
        }
    }
}

/// Computed metrics for one workout, ready for rendering.
///
/// Owns copies of every field; independent of the record it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub workout_type: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}
