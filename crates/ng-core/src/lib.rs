//! Core type aliases, constants, and runtime utilities for nashgrid.
//!
//! This crate provides the foundational types and the numeric search
//! parameters used throughout the nashgrid workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values and payoffs.
pub type Utility = f64;
/// Strategy weights and mixing probabilities.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of players in a normal-form game.
pub const PLAYERS: i32 = 2;

// ============================================================================
// EQUILIBRIUM SEARCH
// Grid resolutions and comparison margins. The scan order and the
// strictly-greater-than-tolerance replacement rule decide which of several
// near-tied candidates gets reported.
// ============================================================================
/// Steps in the fine scan over own-strategy probabilities (0.01 resolution).
pub const RESPONSE_GRID: usize = 100;
/// Steps in the coarse scan used for lookahead stability (0.05 resolution).
pub const LOOKAHEAD_GRID: usize = 20;
/// Margin a candidate must clear to displace the incumbent best response.
pub const RESPONSE_TOLERANCE: Utility = 1e-6;
/// Payoff gap below which a player counts as indifferent between strategies.
pub const INDIFFERENCE_THRESHOLD: Utility = 0.01;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO level.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
