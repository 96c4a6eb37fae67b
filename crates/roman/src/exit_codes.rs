//! Exit codes of the `roman` binary.

pub const SUCCESS: i32 = 0;
pub const CONVERSION_FAILED: i32 = 1; // At least one input could not be converted
pub const USAGE_ERROR: i32 = 2; // Same code clap exits with on bad arguments
