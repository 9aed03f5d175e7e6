use crate::phy::InitialLevel;

/// Log level (overridden by RUST_LOG)
pub const LOG_LEVEL: &str = "info";

/// Program name shown in the banner
pub const APP_NAME: &str = "Digital Signal Encoder";

/// Line state before the first bit when the user picks nothing
pub const DEFAULT_INITIAL_LEVEL: InitialLevel = InitialLevel::High;

// ============================================================================
// Plot Parameters
// ============================================================================

/// Lower bound of the fixed y-axis range
pub const PLOT_Y_MIN: f64 = -1.5;

/// Upper bound of the fixed y-axis range
pub const PLOT_Y_MAX: f64 = 1.5;

/// Levels that may be drawn as plot rows, top to bottom
pub const PLOT_LEVELS: [i8; 3] = [1, 0, -1];

/// Terminal columns per bit interval
pub const DEFAULT_COLS_PER_BIT: usize = 8;

/// Smallest accepted columns per bit
pub const MIN_COLS_PER_BIT: usize = 4;

/// Largest accepted columns per bit (even, so the bit center is a column)
pub const MAX_COLS_PER_BIT: usize = 64;
