// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supabase PostgREST client for the `workouts` table.
//!
//! Handles:
//! - Listing rows ordered by date descending
//! - Inserts/updates with `Prefer: return=representation` so the backend's
//!   canonical row comes back in the response
//! - Delete-by-id filters

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::gateway::WorkoutGateway;
use crate::models::{Workout, WorkoutDraft};
use reqwest::Method;
use serde::de::DeserializeOwned;

/// REST client for one Supabase workouts table.
#[derive(Clone)]
pub struct PostgrestGateway {
    http: reqwest::Client,
    table_url: String,
    anon_key: String,
}

impl PostgrestGateway {
    /// Create a new gateway for `{supabase_url}/rest/v1/workouts`.
    pub fn new(supabase_url: &str, anon_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            table_url: format!("{}/rest/v1/workouts", supabase_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.supabase_url, &config.supabase_anon_key)
    }

    /// Start a request with the Supabase auth headers attached.
    fn request(&self, method: Method) -> reqwest::RequestBuilder {
        self.http
            .request(method, &self.table_url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Check response status and return an error carrying the backend's
    /// message if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, "Supabase request failed");
        Err(AppError::Remote(format!("HTTP {}: {}", status, body)))
    }

    /// Check response and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        self.check_response(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Remote(format!("JSON parse error: {}", e)))
    }

    /// PostgREST returns write representations as a one-element array.
    fn single_row(&self, mut rows: Vec<Workout>, context: &str) -> Result<Workout> {
        rows.pop()
            .ok_or_else(|| AppError::Remote(format!("{}: no row returned", context)))
    }
}

impl WorkoutGateway for PostgrestGateway {
    async fn list(&self) -> Result<Vec<Workout>> {
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "date.desc")])
            .send()
            .await
            .map_err(|e| AppError::Remote(e.to_string()))?;

        self.check_response_json(response).await
    }

    async fn insert(&self, draft: &WorkoutDraft) -> Result<Workout> {
        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(draft)
            .send()
            .await
            .map_err(|e| AppError::Remote(e.to_string()))?;

        let rows = self.check_response_json(response).await?;
        self.single_row(rows, "insert")
    }

    async fn update(&self, workout: &Workout) -> Result<Workout> {
        let response = self
            .request(Method::PATCH)
            .query(&[("id", format!("eq.{}", workout.id))])
            .header("Prefer", "return=representation")
            .json(workout)
            .send()
            .await
            .map_err(|e| AppError::Remote(e.to_string()))?;

        let rows = self.check_response_json(response).await?;
        self.single_row(rows, "update")
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE)
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await
            .map_err(|e| AppError::Remote(e.to_string()))?;

        self.check_response(response).await?;
        Ok(())
    }
}
