//! Tool Configuration Module
//!
//! Loads [`ToolConfig`] from TOML files with environment-specific overrides.

use anyhow::{bail, Context, Result};
use bcx_types::{encode_asset_id, AssetId, UnitExponent, MAX_TRADABLE_UNIT_EXPONENT};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default location of the base configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/asset_tool.toml";

/// Prefix for environment variable overrides (`BCX_LOG_LEVEL`, ...)
pub const ENV_PREFIX: &str = "BCX";

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration for the asset tooling
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ToolConfig {
    /// trace, debug, info, warn or error
    pub log_level: String,

    /// Emit JSON instead of plain text
    pub json_output: bool,

    /// Unit exponent used when a command does not name one
    pub default_unit_exponent: u8,

    /// Assets missing from the built-in metadata table
    pub custom_assets: Vec<CustomAsset>,
}

/// User-defined asset entry
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CustomAsset {
    pub symbol: String,
    pub name: String,
    pub unit_exponent: u8,
}

impl CustomAsset {
    /// Encoded id; the sentinel if the symbol does not encode
    pub fn asset_id(&self) -> AssetId {
        encode_asset_id(&self.symbol)
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_output: false,
            default_unit_exponent: UnitExponent::SATOSHI.get(),
            custom_assets: Vec::new(),
        }
    }
}

impl ToolConfig {
    /// Load configuration from files with environment overrides
    ///
    /// A missing base file is not an error; defaults apply.
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        Self::load_with_prefix(base_path, environment, ENV_PREFIX)
    }

    /// Same as [`ToolConfig::load`] with a custom environment variable prefix
    pub fn load_with_prefix(
        base_path: Option<&Path>,
        environment: Option<&str>,
        env_prefix: &str,
    ) -> Result<Self> {
        let base = base_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));

        let defaults = toml::to_string(&Self::default()).context("Failed to encode defaults")?;
        let mut builder = Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Toml))
            .add_source(File::from(base).format(FileFormat::Toml).required(false));

        // Add environment-specific overrides if specified
        if let Some(env) = environment {
            let env_file = Self::environments_dir(base).join(format!("{}.toml", env));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file).format(FileFormat::Toml));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        builder = builder.add_source(Environment::with_prefix(env_prefix).try_parsing(true));

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Parse a TOML document on top of the defaults
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to encode configuration")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            bail!(
                "log_level '{}' must be one of {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            );
        }

        if self.default_unit_exponent > MAX_TRADABLE_UNIT_EXPONENT {
            bail!(
                "default_unit_exponent {} exceeds {}",
                self.default_unit_exponent,
                MAX_TRADABLE_UNIT_EXPONENT
            );
        }

        for asset in &self.custom_assets {
            if !asset.asset_id().is_valid() {
                bail!("custom asset symbol '{}' does not encode", asset.symbol);
            }
            if asset.unit_exponent > MAX_TRADABLE_UNIT_EXPONENT {
                bail!(
                    "custom asset '{}' unit_exponent {} exceeds {}",
                    asset.symbol,
                    asset.unit_exponent,
                    MAX_TRADABLE_UNIT_EXPONENT
                );
            }
        }

        Ok(())
    }

    /// Validated default unit exponent
    pub fn unit_exponent(&self) -> Result<UnitExponent> {
        UnitExponent::new(self.default_unit_exponent).context("Invalid default_unit_exponent")
    }

    /// Custom asset entry for `id`, if one is configured
    pub fn custom_asset(&self, id: AssetId) -> Option<&CustomAsset> {
        self.custom_assets.iter().find(|asset| asset.asset_id() == id)
    }

    /// Directory holding environment overlays for `base`
    pub fn environments_dir(base: &Path) -> PathBuf {
        base.parent().unwrap_or(Path::new(".")).join("environments")
    }
}
