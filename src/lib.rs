// This lib.rs file exposes modules for testing purposes

// Re-export modules needed for tests
pub mod accessor_synthesizer;
pub mod cli_interface;
pub mod command_processing;
pub mod config_management;
pub mod errors;
pub mod field_selector;
pub mod java_analyzer;
pub mod source_editor;
