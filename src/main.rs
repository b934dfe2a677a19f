// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Running-Log smoke binary
//!
//! Loads the workout list from the configured Supabase backend and logs a
//! summary. The real presentation layer lives elsewhere; this exists to
//! exercise configuration, the gateway, and the repository end to end.

use running_log::{config::Config, gateway::PostgrestGateway, store::WorkoutRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // A missing Supabase credential is startup-fatal.
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(url = %config.supabase_url, "Starting Running-Log");

    let gateway = PostgrestGateway::from_config(&config);
    let mut repository = WorkoutRepository::new(gateway);

    repository.load().await?;
    tracing::info!(count = repository.workouts().len(), "Workouts loaded");

    match repository.workout_for_today() {
        Some(workout) => tracing::info!(
            workout_type = workout.workout_type.label(),
            description = %workout.description,
            "Workout for today"
        ),
        None => tracing::info!("No workout for today"),
    }

    Ok(())
}

/// Initialize logging with an env-filter override.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("running_log=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .init();
}
