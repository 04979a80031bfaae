// src/cli_interface/mod.rs
pub mod args;

pub use self::args::JavagsArgs;
