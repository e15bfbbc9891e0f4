//! Frostboard - Live Contest Standings & Reveal Ceremony
//!
//! This library provides the core functionality for the Frostboard platform,
//! a contest scoreboard server that aggregates judged-submission events into
//! live standings and drives the frozen-scoreboard award ceremony.
//!
//! # Features
//!
//! - Binary (ICPC accept/reject) and Scored (partial credit) problems
//! - Freeze support: late runs masked as undetermined until revealed
//! - Manually stepped reveal protocol, bottom of the standings upward
//! - Deterministic dense competition ranking, recomputed on every read
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Scoreboard**: The standings engine and reveal sequencer
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod scoreboard;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
