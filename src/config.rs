// Global configuration management

use crate::engine::{DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_FRAME_RATE, DEFAULT_OUTPUT_PATH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub encoder: EncoderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Frames per second the images are played at (each image lasts 1/source_fps)
    #[serde(default = "default_fps")]
    pub source_fps: f64,

    /// Frame rate of the encoded video
    #[serde(default = "default_fps")]
    pub output_fps: f64,

    #[serde(default = "default_output")]
    pub output: String,

    /// Where the concat manifest is written
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Optional target resolution, e.g. "1280x720" or "-1x720"
    #[serde(default)]
    pub resolution: Option<String>,

    /// Whether to overwrite an existing output file
    #[serde(default)]
    pub overwrite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// ffmpeg executable name or full path
    #[serde(default = "default_program")]
    pub program: String,
}

fn default_fps() -> f64 {
    DEFAULT_OUTPUT_FRAME_RATE
}

fn default_output() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST_PATH.to_string()
}

fn default_program() -> String {
    "ffmpeg".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source_fps: default_fps(),
            output_fps: default_fps(),
            output: default_output(),
            manifest: default_manifest(),
            resolution: None, // Keep source resolution
            overwrite: false,
        }
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("image-sequencer")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("image-sequencer")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;

            Self::from_toml(&contents).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })
        } else {
            let config = Config::default();

            // Not fatal: the directory may be read-only
            if let Err(e) = config.save() {
                tracing::warn!("Could not create default config file: {:#}", e);
                eprintln!(
                    "Using built-in defaults. Run 'image-sequencer init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }
}
