//! Configuration Management
//!
//! Environment-based configuration loading and validation.

mod settings;

pub use settings::{
    CorsSettings, DatabaseSettings, JwtSettings, ServerSettings, Settings, MIN_TOKEN_KEY_LENGTH,
};
