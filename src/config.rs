//! Layered configuration loading using figment.
//!
//! Sources (highest wins):
//! 1. Environment variables (`MENU_COMPARE_*` prefix, `__` as separator)
//! 2. An explicit config file, or `menu-compare.toml` in the working directory
//! 3. Built-in defaults
//!
//! `MENU_COMPARE_SLIDER__MAX=30` maps to `slider.max`, and so on.

use crate::error::{MenuError, Result};
use crate::filter::PriceBounds;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "menu-compare.toml";

fn default_addr() -> String {
    "0.0.0.0:3000".to_string()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Menu CSV to import at startup
    #[serde(default)]
    pub csv: Option<PathBuf>,

    /// Load the built-in demo venues and items
    #[serde(default)]
    pub demo: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: default_addr() }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MenuConfig {
    /// Price slider bounds and step
    #[serde(default)]
    pub slider: PriceBounds,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl MenuConfig {
    /// Load from defaults, the config file and the environment, then validate.
    ///
    /// An explicit `config_file` must exist; only the implicit
    /// `menu-compare.toml` is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_file {
            if !path.is_file() {
                return Err(MenuError::InvalidConfig {
                    reason: format!("config file {} not found", path.display()),
                });
            }
        }

        let config: MenuConfig = Self::figment(config_file).extract()?;
        config.slider.validate()?;
        Ok(config)
    }

    /// Build the provider chain. Public so callers can layer more on top.
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match config_file {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    figment = figment.merge(Toml::file(local));
                }
            }
        }

        figment.merge(Env::prefixed("MENU_COMPARE_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.slider.min, 0.0);
        assert_eq!(config.slider.max, 20.0);
        assert_eq!(config.slider.step, 0.25);
        assert!(!config.catalog.demo);
        assert!(config.catalog.csv.is_none());
        assert_eq!(config.server.addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                [slider]
                max = 50.0
                step = 0.5

                [catalog]
                demo = true
                "#,
            )?;
            jail.set_env("MENU_COMPARE_SLIDER__MAX", "40");

            let config = MenuConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.slider.max, 40.0);
            assert_eq!(config.slider.step, 0.5);
            assert_eq!(config.slider.min, 0.0);
            assert!(config.catalog.demo);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
                [server]
                addr = "127.0.0.1:8080"
                "#,
            )?;

            let config = MenuConfig::load(Some(Path::new("custom.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.server.addr, "127.0.0.1:8080");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        Jail::expect_with(|_jail| {
            match MenuConfig::load(Some(Path::new("custom.toml"))) {
                Err(MenuError::InvalidConfig { reason }) if reason.contains("custom.toml") => Ok(()),
                other => Err(format!("expected InvalidConfig, got {:?}", other).into()),
            }
        });
    }

    #[test]
    fn test_missing_default_file_is_fine() {
        Jail::expect_with(|_jail| {
            let config = MenuConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.slider.max, 20.0);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_slider_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("MENU_COMPARE_SLIDER__MIN", "25");

            match MenuConfig::load(None) {
                Err(MenuError::InvalidConfig { .. }) => Ok(()),
                other => Err(format!("expected InvalidConfig, got {:?}", other).into()),
            }
        });
    }
}
