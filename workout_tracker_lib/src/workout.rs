use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Running,
    Cycling,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Cycling => "Cycling",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ActivityKind::Running => "running",
            ActivityKind::Cycling => "cycling",
        }
    }
}

/// Variant payload: the extra input field plus the metric derived from it
/// at construction time. The tag lands in the stored record as `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActivityDetails {
    Running {
        cadence: f64, // steps/min
        pace: f64,    // min/km
    },
    Cycling {
        elevation_gain: f64, // m, may be zero or negative
        speed: f64,          // km/h
    },
}

impl ActivityDetails {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityDetails::Running { .. } => ActivityKind::Running,
            ActivityDetails::Cycling { .. } => ActivityKind::Cycling,
        }
    }
}

/// A single logged session. Derived metric and description are computed once
/// in the constructor and stored; reloading a persisted record never
/// recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub date: DateTime<Utc>,
    pub coords: (f64, f64), // (lat, lng)
    pub distance: f64,      // in km
    pub duration: f64,      // in min
    pub description: String,
    #[serde(flatten)]
    pub details: ActivityDetails,
}

impl Workout {
    pub fn running(
        coords: (f64, f64),
        distance: f64,
        duration: f64,
        cadence: f64,
        date: DateTime<Utc>,
    ) -> Self {
        let pace = duration / distance;
        Self::assemble(coords, distance, duration, date, ActivityDetails::Running { cadence, pace })
    }

    pub fn cycling(
        coords: (f64, f64),
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        date: DateTime<Utc>,
    ) -> Self {
        let speed = distance / (duration / 60.0);
        Self::assemble(
            coords,
            distance,
            duration,
            date,
            ActivityDetails::Cycling { elevation_gain, speed },
        )
    }

    fn assemble(
        coords: (f64, f64),
        distance: f64,
        duration: f64,
        date: DateTime<Utc>,
        details: ActivityDetails,
    ) -> Self {
        let description =
            format!("{} on {}", details.kind().label(), date.format("%B %-d"));
        Self {
            id: timestamp_id(date),
            date,
            coords,
            distance,
            duration,
            description,
            details,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        self.details.kind()
    }
}

// Last 10 digits of the millisecond epoch timestamp. Collisions under rapid
// successive submissions are accepted.
fn timestamp_id(date: DateTime<Utc>) -> String {
    let millis = date.timestamp_millis().to_string();
    millis[millis.len().saturating_sub(10)..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn april_14() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn running_derives_pace() {
        let workout = Workout::running((21.0, -52.0), 6.0, 30.0, 200.0, april_14());
        assert_eq!(workout.coords, (21.0, -52.0));
        assert_eq!(workout.kind(), ActivityKind::Running);
        assert_eq!(
            workout.details,
            ActivityDetails::Running { cadence: 200.0, pace: 5.0 }
        );
    }

    #[test]
    fn cycling_derives_speed() {
        let workout = Workout::cycling((21.0, -52.0), 5.0, 15.0, 500.0, april_14());
        assert_eq!(
            workout.details,
            ActivityDetails::Cycling { elevation_gain: 500.0, speed: 20.0 }
        );
    }

    #[test]
    fn cycling_keeps_negative_elevation_gain() {
        let workout = Workout::cycling((48.1, 11.5), 12.0, 40.0, -120.0, april_14());
        let ActivityDetails::Cycling { elevation_gain, .. } = workout.details else {
            panic!("expected cycling details");
        };
        assert_eq!(elevation_gain, -120.0);
    }

    #[test]
    fn description_is_label_month_day() {
        let run = Workout::running((21.0, -52.0), 6.0, 30.0, 200.0, april_14());
        assert_eq!(run.description, "Running on April 14");

        let ride = Workout::cycling(
            (21.0, -52.0),
            5.0,
            15.0,
            500.0,
            Utc.with_ymd_and_hms(2023, 12, 3, 18, 0, 0).unwrap(),
        );
        assert_eq!(ride.description, "Cycling on December 3");
    }

    #[test]
    fn id_is_last_ten_digits_of_millis() {
        let date = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let workout = Workout::running((0.0, 0.0), 1.0, 1.0, 1.0, date);
        assert_eq!(workout.id, "0000000123");
        assert_eq!(workout.id.len(), 10);
    }

    #[test]
    fn record_shape_carries_tag_and_derived_metric() {
        let workout = Workout::running((21.0, -52.0), 6.0, 30.0, 200.0, april_14());
        let value = serde_json::to_value(&workout).unwrap();

        assert_eq!(value["type"], "running");
        assert_eq!(value["coords"], serde_json::json!([21.0, -52.0]));
        assert_eq!(value["cadence"], 200.0);
        assert_eq!(value["pace"], 5.0);
        assert_eq!(value["description"], "Running on April 14");
        assert!(value["date"].is_string());
    }

    #[test]
    fn list_round_trips_field_for_field() {
        let workouts = vec![
            Workout::running((21.0, -52.0), 6.0, 30.0, 200.0, april_14()),
            Workout::cycling((55.7, 12.6), 24.0, 80.0, -35.0, april_14()),
        ];

        let stored = serde_json::to_string(&workouts).unwrap();
        let reloaded: Vec<Workout> = serde_json::from_str(&stored).unwrap();

        assert_eq!(reloaded, workouts);
    }

    #[test]
    fn reload_trusts_stored_fields() {
        let workout = Workout::running((21.0, -52.0), 6.0, 30.0, 200.0, april_14());
        let mut value = serde_json::to_value(&workout).unwrap();

        // A tampered derived metric survives the reload untouched.
        value["pace"] = serde_json::json!(99.9);
        let reloaded: Workout = serde_json::from_value(value).unwrap();

        assert_eq!(
            reloaded.details,
            ActivityDetails::Running { cadence: 200.0, pace: 99.9 }
        );
        assert_eq!(reloaded.description, workout.description);
    }
}
