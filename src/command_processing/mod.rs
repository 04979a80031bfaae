// src/command_processing/mod.rs
pub mod generate;

pub use self::generate::{generate_for_file, generate_in_source, handle_generate};
