//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Meaning                                                   |
//! |------|-----------------------------------------------------------|
//! | 0    | Success                                                   |
//! | 1    | General error (unspecified, output write failure)         |
//! | 2    | CLI usage error (bad args, stdin without --from)          |
//! | 3    | Input could not be read or parsed                         |
//! | 4    | Settings file could not be read or failed validation      |
//! | 5    | Engine rejected the request (preset, condition, column)   |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
/// Also what clap exits with on parse failures.
pub const EXIT_USAGE: u8 = 2;

/// Input file missing, unreadable, or not a grid.
pub const EXIT_INPUT: u8 = 3;

/// Settings file unreadable or invalid (only with an explicit --config).
pub const EXIT_CONFIG: u8 = 4;

/// Unknown preset tag, malformed condition, or unknown column.
pub const EXIT_ENGINE: u8 = 5;
