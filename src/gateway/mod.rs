// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Remote data gateway for the workouts table.
//!
//! The repository talks to persistence exclusively through the
//! [`WorkoutGateway`] trait; the gateway is constructed explicitly and
//! injected at repository construction time, so tests substitute an
//! in-process fake.

mod postgrest;

pub use postgrest::PostgrestGateway;

use crate::error::Result;
use crate::models::{Workout, WorkoutDraft};

/// Remote table interface used for workout persistence.
#[allow(async_fn_in_trait)]
pub trait WorkoutGateway {
    /// Fetch all workout records, ordered by date descending.
    async fn list(&self) -> Result<Vec<Workout>>;

    /// Insert a draft record; returns the canonical stored record with
    /// server-assigned `id` and `created_at`.
    async fn insert(&self, draft: &WorkoutDraft) -> Result<Workout>;

    /// Update the record matching `workout.id` with the full record;
    /// returns the canonical stored version.
    async fn update(&self, workout: &Workout) -> Result<Workout>;

    /// Delete the record with the given id.
    async fn delete(&self, id: &str) -> Result<()>;
}
