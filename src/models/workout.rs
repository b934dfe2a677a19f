// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model for storage and the wire representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workout category. The wire form is the snake_case token
/// (e.g. `"easy_run"`), matching the stored rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    EasyRun,
    TempoRun,
    IntervalTraining,
    LongRun,
    RecoveryRun,
    Race,
}

impl WorkoutType {
    /// All categories, in display order.
    pub const ALL: [WorkoutType; 6] = [
        WorkoutType::EasyRun,
        WorkoutType::TempoRun,
        WorkoutType::IntervalTraining,
        WorkoutType::LongRun,
        WorkoutType::RecoveryRun,
        WorkoutType::Race,
    ];

    /// Human-readable label for pickers and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::EasyRun => "Easy Run",
            WorkoutType::TempoRun => "Tempo Run",
            WorkoutType::IntervalTraining => "Interval Training",
            WorkoutType::LongRun => "Long Run",
            WorkoutType::RecoveryRun => "Recovery Run",
            WorkoutType::Race => "Race",
        }
    }

    /// Display icon token for this category. Opaque to this crate; the
    /// presentation layer resolves it to an actual glyph.
    pub fn icon_name(&self) -> &'static str {
        match self {
            WorkoutType::EasyRun | WorkoutType::RecoveryRun => "figure.walk",
            WorkoutType::TempoRun => "figure.run.square.stack",
            WorkoutType::IntervalTraining => "timer",
            WorkoutType::LongRun => "figure.outdoor.cycle",
            WorkoutType::Race => "flag.fill",
        }
    }
}

/// Stored workout record.
///
/// `id` and `created_at` are assigned by the backend; a record only carries
/// them after the gateway has acknowledged it (see [`WorkoutDraft`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Opaque unique identifier, assigned at creation, immutable
    pub id: String,
    /// Owner identifier; absent when no authenticated user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Calendar date the workout occurred or is planned for
    #[serde(with = "wire_date")]
    pub date: DateTime<Utc>,
    /// Free-text description; never empty after trimming
    pub description: String,
    /// Workout category
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Duration in whole minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Distance in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Server-assigned creation timestamp, not settable by the client
    #[serde(
        default,
        with = "wire_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Client-constructed workout prior to gateway acknowledgment: no canonical
/// `id` or `created_at` yet. Serialized as the insert body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(with = "wire_date")]
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Serde adapter for date columns.
///
/// The backend stores either a bare calendar date or a full timestamp, so
/// deserialization tries, in order: `yyyy-MM-dd`, RFC 3339 (fractional
/// seconds and offsets allowed), then an offset-less ISO-8601 timestamp
/// taken as UTC. First matching format wins. Serialization always emits
/// RFC 3339 with a `Z` suffix.
pub mod wire_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&crate::time_utils::format_utc_rfc3339(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub(crate) fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date.and_time(NaiveTime::MIN).and_utc());
        }
        if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
            return Ok(date.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.and_utc())
            .map_err(|e| format!("unrecognized date {:?}: {}", raw, e))
    }

    /// Adapter for optional date columns (`created_at`).
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            date: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let raw = Option::<String>::deserialize(deserializer)?;
            raw.map(|raw| super::parse(&raw).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}
