//! Tuning constants for the construction economy.
//!
//! This module centralizes the shipped defaults; deployments override them
//! through [`AgentConfig`](crate::config::AgentConfig).

use crate::world::Tick;

// ============================================================================
// PLACEMENT SEARCH
// ============================================================================

/// First square half-width tried around the home structure
pub const SEARCH_START_RADIUS: i32 = 3;

/// How much the half-width grows after each failed pass
pub const SEARCH_RADIUS_STEP: i32 = 2;

/// The search gives up once the half-width would reach this value
pub const SEARCH_RADIUS_CAP: i32 = 40;

/// Candidate tiles closer than this (Chebyshev) to any other unit are
/// rejected, keeping exit paths around finished structures clear
pub const UNIT_COLLISION_MARGIN: i32 = 4;

/// Geysers at or beyond this Chebyshev distance from the home structure
/// are not considered claimable
pub const GEYSER_SCAN_RANGE: i32 = 40;

// ============================================================================
// COMMITMENT RECONCILIATION
// ============================================================================

/// Ticks a build order may sit unacknowledged before its reservation is
/// refunded; covers the engine's normal delay between accepting an order
/// and the worker reporting construction
pub const REFUND_GRACE_TICKS: Tick = 8;
