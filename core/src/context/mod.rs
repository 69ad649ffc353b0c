//! Observer configuration and its persistence

mod config;
mod error;

pub use config::{APP_NAME, CONFIG_NAME, ObserverConfig, ObserverConfigExt};
pub use error::ConfigError;
