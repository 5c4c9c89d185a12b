pub mod diff;

// Re-export all command functions
pub use diff::{DiffArgs, DiffFormat, cmd_diff, run_diff};
