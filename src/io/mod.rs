/// Command-line argument parsing and session orchestration
pub mod cli;
/// Constants and default values
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Text reports of boards and cuts
pub mod report;
/// Cut command parsing
pub mod script;
