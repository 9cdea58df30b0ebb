//! Exit code constants for the webptidy CLI.
//!
//! Every tool exits 0 once it has started processing files; per-file
//! failures are reported in the summary, not through the exit code.
//! - 0: Success
//! - 1: User error (bad args, no terminal for a required prompt)
//! - 2: A required image codec is not compiled in

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an interaction that cannot happen.
pub const USER_ERROR: i32 = 1;

/// The image codec cannot decode WebP or encode JPEG.
pub const CODEC_UNAVAILABLE: i32 = 2;
