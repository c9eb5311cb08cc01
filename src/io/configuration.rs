//! Driver constants and runtime configuration defaults

// Default values for configurable parameters
/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 15;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 15;

/// Edge length of one rendered cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 40;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of solve attempts before giving up on contradictions
pub const DEFAULT_ATTEMPTS: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
