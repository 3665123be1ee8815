/// Exit codes for rulens, following Ruff's convention
///
/// These exit codes allow users and CI/CD systems to distinguish between
/// different types of failures.
/// Success - Documentation generated or already up to date
pub const SUCCESS: i32 = 0;

/// Documentation out of date - `check` found a mismatch and did not update
pub const OUT_OF_DATE: i32 = 1;

/// Tool error - No linter produced results, file access error, or internal error
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{OUT_OF_DATE, SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with out-of-date code (1)
    pub fn out_of_date() -> ! {
        std::process::exit(OUT_OF_DATE);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
