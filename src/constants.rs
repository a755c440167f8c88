//! Game constants and theoretical win rates.

/// Number of doors in the game.
pub const DOOR_COUNT: u8 = 3;

/// Theoretical win probability when keeping the initial door.
/// Staying wins exactly when the initial pick hit the prize: 1/3.
pub const STAY_WIN_RATE: f64 = 1.0 / 3.0;

/// Theoretical win probability when switching after the goat reveal.
/// Switching wins exactly when the initial pick missed the prize: 2/3.
pub const SWITCH_WIN_RATE: f64 = 2.0 / 3.0;
