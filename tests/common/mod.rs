// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test fixtures: an in-process fake gateway with failure injection
//! and call counting, plus record builders.

use chrono::{DateTime, Local, TimeZone, Utc};
use running_log::error::{AppError, Result};
use running_log::gateway::WorkoutGateway;
use running_log::models::{Workout, WorkoutDraft, WorkoutType};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Per-operation call counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calls {
    pub list: u32,
    pub insert: u32,
    pub update: u32,
    pub delete: u32,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Workout>,
    next_id: u32,
    calls: Calls,
    fail_list: bool,
    fail_insert: bool,
    fail_update: bool,
    fail_delete: bool,
    fail_delete_ids: HashSet<String>,
}

/// In-memory stand-in for the remote workouts table.
///
/// Clones share state, so a test can keep one handle for inspection after
/// moving another into the repository.
#[derive(Clone, Default)]
pub struct FakeGateway {
    inner: Arc<Mutex<Inner>>,
}

#[allow(dead_code)]
impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(rows: Vec<Workout>) -> Self {
        let gateway = Self::new();
        gateway.inner.lock().unwrap().rows = rows;
        gateway
    }

    pub fn calls(&self) -> Calls {
        self.inner.lock().unwrap().calls
    }

    pub fn rows(&self) -> Vec<Workout> {
        self.inner.lock().unwrap().rows.clone()
    }

    pub fn fail_list(&self) {
        self.inner.lock().unwrap().fail_list = true;
    }

    pub fn fail_insert(&self) {
        self.inner.lock().unwrap().fail_insert = true;
    }

    pub fn fail_update(&self) {
        self.inner.lock().unwrap().fail_update = true;
    }

    pub fn fail_delete(&self) {
        self.inner.lock().unwrap().fail_delete = true;
    }

    /// Fail deletes for one specific id only.
    pub fn fail_delete_id(&self, id: &str) {
        self.inner
            .lock()
            .unwrap()
            .fail_delete_ids
            .insert(id.to_string());
    }

    fn remote(what: &str) -> AppError {
        AppError::Remote(format!("injected {} failure", what))
    }
}

impl WorkoutGateway for FakeGateway {
    async fn list(&self) -> Result<Vec<Workout>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.list += 1;
        if inner.fail_list {
            return Err(Self::remote("list"));
        }
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn insert(&self, draft: &WorkoutDraft) -> Result<Workout> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.insert += 1;
        if inner.fail_insert {
            return Err(Self::remote("insert"));
        }
        inner.next_id += 1;
        let stored = Workout {
            id: format!("w-{}", inner.next_id),
            user_id: draft.user_id.clone(),
            date: draft.date,
            description: draft.description.clone(),
            workout_type: draft.workout_type,
            duration_minutes: draft.duration_minutes,
            distance_km: draft.distance_km,
            created_at: Some(Utc::now()),
        };
        inner.rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, workout: &Workout) -> Result<Workout> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.update += 1;
        if inner.fail_update {
            return Err(Self::remote("update"));
        }
        let row = inner
            .rows
            .iter_mut()
            .find(|w| w.id == workout.id)
            .ok_or_else(|| AppError::Remote(format!("no row with id {}", workout.id)))?;
        // Canonical version keeps the server-assigned creation timestamp.
        let stored = Workout {
            created_at: row.created_at,
            ..workout.clone()
        };
        *row = stored.clone();
        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.delete += 1;
        if inner.fail_delete || inner.fail_delete_ids.contains(id) {
            return Err(Self::remote("delete"));
        }
        inner.rows.retain(|w| w.id != id);
        Ok(())
    }
}

/// A UTC instant at noon local time on the given day, so local-calendar-day
/// comparisons are stable in any test timezone.
#[allow(dead_code)]
pub fn local_day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    local_day_at(year, month, day, 12, 0)
}

#[allow(dead_code)]
pub fn local_day_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

#[allow(dead_code)]
pub fn workout(id: &str, date: DateTime<Utc>) -> Workout {
    Workout {
        id: id.to_string(),
        user_id: None,
        date,
        description: format!("workout {}", id),
        workout_type: WorkoutType::EasyRun,
        duration_minutes: Some(40),
        distance_km: Some(8.0),
        created_at: None,
    }
}

#[allow(dead_code)]
pub fn draft(description: &str, date: DateTime<Utc>) -> WorkoutDraft {
    WorkoutDraft {
        user_id: None,
        date,
        description: description.to_string(),
        workout_type: WorkoutType::TempoRun,
        duration_minutes: Some(50),
        distance_km: Some(10.5),
    }
}
