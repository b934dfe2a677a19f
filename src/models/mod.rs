// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the running log.

pub mod workout;

pub use workout::{Workout, WorkoutDraft, WorkoutType};
