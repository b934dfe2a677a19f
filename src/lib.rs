// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Running-Log: personal running log core
//!
//! This crate provides the persistence-facing logic of a personal running
//! log: an in-memory workout repository synchronized with a hosted Supabase
//! table, and the fixed 6x7 calendar grid used by the month view.

pub mod calendar;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod store;
pub mod time_utils;
