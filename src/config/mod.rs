//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/dotagents/config.toml)
//! 3. Project config (.dotagents/config.toml)
//! 4. Environment variables (DOTAGENTS_*, `__` separates nesting levels)
//! 5. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
