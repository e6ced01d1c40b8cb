//! Configuration: TOML file, environment override and CLI overrides.

mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides, API_URL_ENV_VAR};
pub use types::{
    Config, EndpointConfig, SummaryConfig, UiConfig, Variant, STRICT_LENGTHS, STRICT_MIN_WORDS,
};
