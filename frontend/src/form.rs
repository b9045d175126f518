use thiserror::Error;
use workout_tracker_lib::workout::ActivityKind;

/// Raised for any required field that is non-numeric, non-finite, or not
/// strictly positive. Elevation gain only has to be a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("inputs have to be positive numbers")]
pub struct InvalidInput;

/// Validated form values, ready to be combined with a map click location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDraft {
    Running {
        distance: f64,
        duration: f64,
        cadence: f64,
    },
    Cycling {
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    },
}

pub fn parse_form(
    kind: ActivityKind,
    distance: &str,
    duration: &str,
    extra: &str,
) -> Result<WorkoutDraft, InvalidInput> {
    let distance = positive(distance)?;
    let duration = positive(duration)?;

    match kind {
        ActivityKind::Running => Ok(WorkoutDraft::Running {
            distance,
            duration,
            cadence: positive(extra)?,
        }),
        ActivityKind::Cycling => Ok(WorkoutDraft::Cycling {
            distance,
            duration,
            elevation_gain: finite(extra)?,
        }),
    }
}

fn finite(raw: &str) -> Result<f64, InvalidInput> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(InvalidInput)
}

fn positive(raw: &str) -> Result<f64, InvalidInput> {
    let value = finite(raw)?;
    if value > 0.0 { Ok(value) } else { Err(InvalidInput) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_draft_parses() {
        let draft = parse_form(ActivityKind::Running, "6", "30", "200").unwrap();
        assert_eq!(
            draft,
            WorkoutDraft::Running { distance: 6.0, duration: 30.0, cadence: 200.0 }
        );
    }

    #[test]
    fn rejects_zero_negative_and_non_numeric() {
        assert_eq!(parse_form(ActivityKind::Running, "0", "30", "200"), Err(InvalidInput));
        assert_eq!(parse_form(ActivityKind::Running, "6", "-30", "200"), Err(InvalidInput));
        assert_eq!(parse_form(ActivityKind::Running, "6", "30", "fast"), Err(InvalidInput));
        assert_eq!(parse_form(ActivityKind::Cycling, "", "30", "500"), Err(InvalidInput));
        assert_eq!(parse_form(ActivityKind::Running, "inf", "30", "200"), Err(InvalidInput));
    }

    #[test]
    fn cycling_accepts_negative_elevation() {
        // Elevation loss is not range-checked; only cadence is.
        let downhill = parse_form(ActivityKind::Cycling, "12", "40", "-120").unwrap();
        assert_eq!(
            downhill,
            WorkoutDraft::Cycling { distance: 12.0, duration: 40.0, elevation_gain: -120.0 }
        );

        let flat = parse_form(ActivityKind::Cycling, "12", "40", "0").unwrap();
        assert_eq!(
            flat,
            WorkoutDraft::Cycling { distance: 12.0, duration: 40.0, elevation_gain: 0.0 }
        );
    }

    #[test]
    fn draft_and_click_location_build_the_workout() {
        use chrono::{TimeZone, Utc};
        use workout_tracker_lib::workout::{ActivityDetails, Workout};

        let draft = parse_form(ActivityKind::Running, "6", "30", "200").unwrap();
        let WorkoutDraft::Running { distance, duration, cadence } = draft else {
            panic!("expected a running draft");
        };

        let clicked = (21.0, -52.0);
        let date = Utc.with_ymd_and_hms(2023, 4, 14, 9, 30, 0).unwrap();
        let workout = Workout::running(clicked, distance, duration, cadence, date);

        assert_eq!(workout.coords, clicked);
        assert_eq!(
            workout.details,
            ActivityDetails::Running { cadence: 200.0, pace: 5.0 }
        );
    }

    #[test]
    fn cycling_still_rejects_non_numeric_elevation() {
        assert_eq!(parse_form(ActivityKind::Cycling, "12", "40", "hilly"), Err(InvalidInput));
        assert_eq!(parse_form(ActivityKind::Cycling, "12", "40", ""), Err(InvalidInput));
    }
}
