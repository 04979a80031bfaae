// src/config_management/mod.rs
pub mod settings;

pub use self::settings::AppConfig;
