//! Packet dispatch: map an activity code to a workout record.
//!
//! The code-to-variant mapping is closed (exactly three entries) and not
//! extensible at runtime.

use crate::{Error, Result, Workout};

/// Build a [`Workout`] from an activity code and its raw values.
///
/// Value order follows the variant's constructor:
/// - `"RUN"`: `[action_count, duration_h, weight_kg]`
/// - `"WLK"`: `[action_count, duration_h, weight_kg, height_cm]`
/// - `"SWM"`: `[action_count, duration_h, weight_kg, pool_length_m, pool_laps]`
///
/// An unknown code fails with [`Error::InvalidWorkoutType`]; a wrong value
/// count fails with [`Error::ArgumentCountMismatch`]. Missing values are
/// never padded.
pub fn read_packet(code: &str, values: &[f64]) -> Result<Workout> {
    match code {
        "RUN" => {
            expect_values(code, values, 3)?;
            Ok(Workout::Running {
                action_count: values[0] as u32,
                duration_h: values[1],
                weight_kg: values[2],
            })
        }
        "WLK" => {
            expect_values(code, values, 4)?;
            Ok(Workout::Walking {
                action_count: values[0] as u32,
                duration_h: values[1],
                weight_kg: values[2],
                height_cm: values[3],
            })
        }
        "SWM" => {
            expect_values(code, values, 5)?;
            Ok(Workout::Swimming {
                action_count: values[0] as u32,
                duration_h: values[1],
                weight_kg: values[2],
                pool_length_m: values[3],
                pool_laps: values[4] as u32,
            })
        }
        other => Err(Error::InvalidWorkoutType {
            code: other.to_string(),
        }),
    }
}

fn expect_values(code: &str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(Error::ArgumentCountMismatch {
            code: code.to_string(),
            expected,
            got: values.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_running() {
        let workout = read_packet("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(workout.kind_name(), "Running");
        assert_eq!(workout.action_count(), 15000);
        assert_eq!(workout.weight_kg(), 75.0);
    }

    #[test]
    fn test_dispatch_walking() {
        let workout = read_packet("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        match workout {
            Workout::Walking { height_cm, .. } => assert_eq!(height_cm, 180.0),
            other => panic!("Expected Walking, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_swimming() {
        let workout = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        match workout {
            Workout::Swimming {
                pool_length_m,
                pool_laps,
                ..
            } => {
                assert_eq!(pool_length_m, 25.0);
                assert_eq!(pool_laps, 40);
            }
            other => panic!("Expected Swimming, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        let result = read_packet("XYZ", &[720.0, 1.0, 80.0, 25.0, 40.0]);
        match result {
            Err(Error::InvalidWorkoutType { code }) => assert_eq!(code, "XYZ"),
            other => panic!("Expected InvalidWorkoutType, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_code_rejected_regardless_of_values() {
        assert!(matches!(
            read_packet("run", &[15000.0, 1.0, 75.0]),
            Err(Error::InvalidWorkoutType { .. })
        ));
        assert!(matches!(
            read_packet("", &[]),
            Err(Error::InvalidWorkoutType { .. })
        ));
    }

    #[test]
    fn test_value_count_mismatch_rejected() {
        match read_packet("WLK", &[9000.0, 1.0, 75.0]) {
            Err(Error::ArgumentCountMismatch {
                code,
                expected,
                got,
            }) => {
                assert_eq!(code, "WLK");
                assert_eq!(expected, 4);
                assert_eq!(got, 3);
            }
            other => panic!("Expected ArgumentCountMismatch, got {:?}", other),
        }

        assert!(matches!(
            read_packet("RUN", &[15000.0, 1.0, 75.0, 99.0]),
            Err(Error::ArgumentCountMismatch { .. })
        ));
    }
}
