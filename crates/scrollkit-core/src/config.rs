use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::host::{default_device_pixel_ratio, default_true, StaticHost};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub host: StaticHost,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// Accept either a preset name ("browser", "headless") or a full table
impl<'de> Deserialize<'de> for StaticHost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct StaticHostVisitor;

        impl<'de> Visitor<'de> for StaticHostVisitor {
            type Value = StaticHost;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    "a preset name (\"browser\" or \"headless\") or a map with 'document', 'device_pixel_ratio' and 'user_agent'",
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<StaticHost, E>
            where
                E: de::Error,
            {
                match value {
                    "browser" => Ok(StaticHost::default()),
                    "headless" => Ok(StaticHost::headless()),
                    other => Err(E::custom(format!("unknown host preset '{}'", other))),
                }
            }

            fn visit_map<M>(self, mut map: M) -> Result<StaticHost, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut document: Option<bool> = None;
                let mut device_pixel_ratio: Option<f64> = None;
                let mut user_agent: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "document" => document = Some(map.next_value()?),
                        "device_pixel_ratio" => device_pixel_ratio = Some(map.next_value()?),
                        "user_agent" => user_agent = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(StaticHost {
                    document: document.unwrap_or_else(default_true),
                    device_pixel_ratio: device_pixel_ratio
                        .unwrap_or_else(default_device_pixel_ratio),
                    user_agent: user_agent.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(StaticHostVisitor)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrollkit/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrollkit")
            .join("config.toml")
    }
}
