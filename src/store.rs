// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory workout repository synchronized with the remote gateway.
//!
//! The repository owns the authoritative client-side list of workouts and
//! mutates it only after the gateway acknowledges an operation. State is
//! observable two ways: direct accessors, and a `tokio::sync::watch`
//! channel that publishes a snapshot after every state change.
//!
//! All mutation goes through `&mut self`, so the single-writer discipline
//! is enforced by the borrow checker rather than by convention. Concurrent
//! mutating calls are not serialized here; if a caller issues them anyway
//! (e.g. behind a mutex), later completions win.

use crate::error::{AppError, Result};
use crate::gateway::WorkoutGateway;
use crate::models::{Workout, WorkoutDraft};
use crate::time_utils::same_local_day;
use chrono::{DateTime, Utc};
use tokio::sync::watch;

/// Observable repository state, published on every change.
#[derive(Debug, Clone, Default)]
pub struct RepositorySnapshot {
    /// Current workout list, date descending
    pub workouts: Vec<Workout>,
    /// Whether a remote-facing operation is in flight
    pub is_loading: bool,
    /// Human-readable description of the most recent failure
    pub last_error: Option<String>,
}

/// Client-side workout store backed by a remote gateway.
pub struct WorkoutRepository<G> {
    gateway: G,
    workouts: Vec<Workout>,
    is_loading: bool,
    last_error: Option<String>,
    changes: watch::Sender<RepositorySnapshot>,
}

impl<G: WorkoutGateway> WorkoutRepository<G> {
    pub fn new(gateway: G) -> Self {
        let (changes, _) = watch::channel(RepositorySnapshot::default());
        Self {
            gateway,
            workouts: Vec::new(),
            is_loading: false,
            last_error: None,
            changes,
        }
    }

    // ─── Observable State ────────────────────────────────────────────────

    /// Current workout list, sorted by date descending.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Most recent recorded failure, until cleared.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Clear the recorded error so the next failure is observable again.
    pub fn clear_error(&mut self) {
        if self.last_error.take().is_some() {
            self.notify();
        }
    }

    /// Subscribe to state snapshots. The receiver observes every change,
    /// including `is_loading` toggles around remote calls.
    pub fn subscribe(&self) -> watch::Receiver<RepositorySnapshot> {
        self.changes.subscribe()
    }

    fn notify(&self) {
        self.changes.send_replace(RepositorySnapshot {
            workouts: self.workouts.clone(),
            is_loading: self.is_loading,
            last_error: self.last_error.clone(),
        });
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.last_error = None;
        self.notify();
    }

    fn finish(&mut self, error: Option<&AppError>) {
        self.is_loading = false;
        self.last_error = error.map(|e| e.to_string());
        self.notify();
    }

    fn sort(&mut self) {
        self.workouts.sort_by(|a, b| b.date.cmp(&a.date));
    }

    // ─── Remote-Facing Operations ────────────────────────────────────────

    /// Fetch all workouts from the gateway, replacing the list wholesale.
    ///
    /// On failure the list is cleared rather than left stale, and the
    /// error is recorded.
    pub async fn load(&mut self) -> Result<()> {
        self.begin();

        match self.gateway.list().await {
            Ok(workouts) => {
                self.workouts = workouts;
                self.sort();
                tracing::debug!(count = self.workouts.len(), "Workouts loaded");
                self.finish(None);
                Ok(())
            }
            Err(e) => {
                self.workouts.clear();
                tracing::warn!(error = %e, "Failed to load workouts");
                self.finish(Some(&e));
                Err(e)
            }
        }
    }

    /// Create a workout from a draft.
    ///
    /// A draft whose trimmed description is empty is rejected before any
    /// network call. On success the gateway's canonical record (with
    /// assigned id and creation timestamp) is inserted and the list
    /// re-sorted.
    pub async fn create(&mut self, draft: WorkoutDraft) -> Result<()> {
        let description = draft.description.trim().to_string();
        if description.is_empty() {
            let e = AppError::Validation("description must not be empty".to_string());
            self.last_error = Some(e.to_string());
            self.notify();
            return Err(e);
        }
        let draft = WorkoutDraft {
            description,
            ..draft
        };

        self.begin();

        match self.gateway.insert(&draft).await {
            Ok(stored) => {
                tracing::debug!(id = %stored.id, "Workout created");
                self.workouts.push(stored);
                self.sort();
                self.finish(None);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create workout");
                self.finish(Some(&e));
                Err(e)
            }
        }
    }

    /// Update an existing workout by id, replacing the in-memory record
    /// with the gateway's canonical version. In-memory state is untouched
    /// on failure.
    pub async fn update(&mut self, workout: &Workout) -> Result<()> {
        self.begin();

        match self.gateway.update(workout).await {
            Ok(stored) => {
                if let Some(existing) = self.workouts.iter_mut().find(|w| w.id == stored.id) {
                    *existing = stored;
                    self.sort();
                }
                self.finish(None);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(id = %workout.id, error = %e, "Failed to update workout");
                self.finish(Some(&e));
                Err(e)
            }
        }
    }

    /// Delete a workout. The record is removed from the list only after
    /// the gateway confirms; on failure it stays.
    pub async fn delete(&mut self, workout: &Workout) -> Result<()> {
        self.begin();

        match self.gateway.delete(&workout.id).await {
            Ok(()) => {
                self.workouts.retain(|w| w.id != workout.id);
                self.finish(None);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(id = %workout.id, error = %e, "Failed to delete workout");
                self.finish(Some(&e));
                Err(e)
            }
        }
    }

    /// Delete records one at a time, in the given order, stopping at the
    /// first failure. Records after the failed one are never attempted, so
    /// callers must assume partial completion when this returns an error.
    pub async fn delete_many(&mut self, workouts: &[Workout]) -> Result<()> {
        for workout in workouts {
            self.delete(workout).await?;
        }
        Ok(())
    }

    // ─── Derived Reads ───────────────────────────────────────────────────

    /// Workouts whose calendar day (local calendar) equals `date`'s, in
    /// current sort order.
    pub fn workouts_on(&self, date: DateTime<Utc>) -> Vec<&Workout> {
        self.workouts
            .iter()
            .filter(|w| same_local_day(w.date, date))
            .collect()
    }

    /// First workout scheduled for today's calendar day, if any.
    pub fn workout_for_today(&self) -> Option<&Workout> {
        let now = Utc::now();
        self.workouts.iter().find(|w| same_local_day(w.date, now))
    }

    /// Whether any workout falls on the given calendar day.
    pub fn has_workout_on(&self, date: DateTime<Utc>) -> bool {
        !self.workouts_on(date).is_empty()
    }
}
