//! Metric formulas for the three workout variants.
//!
//! Each variant owns its complete formula set. The step-length constant is
//! duplicated per activity on purpose: sharing it across variants invited
//! the cross-variant coupling the swimming override already broke once.
//!
//! No range validation happens here. A zero duration or height produces
//! non-finite floats that flow through to the rendered summary.

use crate::{Summary, Workout};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

/// Distance covered per step (running, walking), km
const STEP_LEN_KM: f64 = 0.65;
/// Distance covered per stroke (swimming), km
const STROKE_LEN_KM: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MS: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

impl Workout {
    /// Distance covered, in km
    pub fn distance_km(&self) -> f64 {
        let step_len = match self {
            Workout::Running { .. } | Workout::Walking { .. } => STEP_LEN_KM,
            Workout::Swimming { .. } => STROKE_LEN_KM,
        };
        self.action_count() as f64 * step_len / M_IN_KM
    }

    /// Mean speed over the session, in km/h
    ///
    /// Swimming derives speed from pool geometry rather than from the
    /// generic distance formula.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running { .. } | Workout::Walking { .. } => {
                self.distance_km() / self.duration_h()
            }
            Workout::Swimming {
                duration_h,
                pool_length_m,
                pool_laps,
                ..
            } => *pool_length_m * *pool_laps as f64 / M_IN_KM / *duration_h,
        }
    }

    /// Estimated energy expenditure, in kcal
    pub fn calories_kcal(&self) -> f64 {
        match self {
            Workout::Running {
                duration_h,
                weight_kg,
                ..
            } => {
                (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() + RUN_SPEED_SHIFT) * weight_kg
                    / M_IN_KM
                    * duration_h
                    * MIN_IN_H
            }
            Workout::Walking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => {
                let speed_ms = self.mean_speed_kmh() * KMH_IN_MS;
                (WALK_WEIGHT_MULTIPLIER * weight_kg
                    + speed_ms.powi(2) / (height_cm / CM_IN_M)
                        * WALK_SPEED_HEIGHT_MULTIPLIER
                        * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Workout::Swimming {
                duration_h,
                weight_kg,
                ..
            } => {
                (self.mean_speed_kmh() + SWIM_SPEED_SHIFT)
                    * SWIM_WEIGHT_MULTIPLIER
                    * weight_kg
                    * duration_h
            }
        }
    }

    /// Assemble a [`Summary`] from freshly evaluated metrics.
    ///
    /// Nothing is cached: distance, speed, and calories are recomputed on
    /// every call, so repeated calls on the same record always agree.
    pub fn summary(&self) -> Summary {
        Summary {
            workout_type: self.kind_name(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
