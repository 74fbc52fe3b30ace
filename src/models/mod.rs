pub mod config;

pub use config::{AppConfig, Mode, CONFIG_ENV};
