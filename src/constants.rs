//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// SCORING DEFAULTS
// =============================================================================

/// Penalty time for each wrong submission before acceptance (in minutes)
pub const DEFAULT_PENALTY_MINUTES: i64 = 20;

/// Best score above which a partial-credit problem counts as accepted for display
pub const DEFAULT_SCORED_ACCEPT_THRESHOLD: f64 = 0.0;

// =============================================================================
// BOARD LIMITS
// =============================================================================

/// Maximum number of boards loaded at once
pub const DEFAULT_MAX_BOARDS: usize = 16;

/// Maximum number of teams in a single contest
pub const MAX_TEAMS: usize = 1024;

/// Maximum number of problems in a single contest
pub const MAX_PROBLEMS: usize = 64;

/// Maximum number of runs in a single contest feed
pub const MAX_RUNS: usize = 100_000;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum contest title length
pub const MAX_CONTEST_TITLE_LENGTH: u64 = 256;

/// Maximum team name length
pub const MAX_TEAM_NAME_LENGTH: usize = 128;

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: usize = 64;

// =============================================================================
// SCOREBOARD CELL TEXT
// =============================================================================

/// Cell text for a frozen or pending result
pub const CELL_TEXT_PENDING: &str = "?";

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
