//! # B&C Exchange Tool Configuration
//!
//! Layered configuration for tools built on `bcx-types`: compiled defaults,
//! then a TOML file, then an optional environment overlay file, then
//! `BCX_`-prefixed environment variables.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bcx_config::ToolConfig;
//! use std::path::Path;
//!
//! let config = ToolConfig::load(Some(Path::new("config/asset_tool.toml")), None)?;
//! println!("log level: {}", config.log_level);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod tool_config;

pub use tool_config::{CustomAsset, ToolConfig, DEFAULT_CONFIG_PATH, ENV_PREFIX};
