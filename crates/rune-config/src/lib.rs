//! Rune motion configuration system
//!
//! This crate provides centralized defaults for the transition library,
//! loading settings from `motion.toml` with environment variable overrides.
//!
//! Every field is optional: an unset field means "use the transition's
//! built-in default". Values are validated when the transition library turns
//! a section into its parameter struct, not here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "motion.toml";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for transition defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MotionConfig {
    pub fade: TimingConfig,
    pub blur: BlurConfig,
    pub fly: FlyConfig,
    pub slide: SlideConfig,
    pub scale: ScaleConfig,
    pub draw: DrawConfig,
    pub crossfade: CrossfadeConfig,
}

/// Timing fields shared by every transition section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay before the transition starts, in milliseconds
    pub delay_ms: Option<f64>,
    /// Fixed duration in milliseconds
    pub duration_ms: Option<f64>,
    /// Easing name (`cubic-out`, `linear`, `cubic-bezier(...)`, ...)
    pub easing: Option<String>,
}

/// `blur` transition defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BlurConfig {
    #[serde(flatten)]
    pub timing: TimingConfig,
    /// Blur radius as a CSS length (e.g. `"5px"`)
    pub amount: Option<String>,
    /// Opacity at the hidden end of the transition
    pub opacity: Option<f64>,
}

/// `fly` transition defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FlyConfig {
    #[serde(flatten)]
    pub timing: TimingConfig,
    /// Horizontal offset as a CSS length
    pub x: Option<String>,
    /// Vertical offset as a CSS length
    pub y: Option<String>,
    pub opacity: Option<f64>,
}

/// `slide` transition defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SlideConfig {
    #[serde(flatten)]
    pub timing: TimingConfig,
    /// `"x"` or `"y"`
    pub axis: Option<String>,
}

/// `scale` transition defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScaleConfig {
    #[serde(flatten)]
    pub timing: TimingConfig,
    /// Scale factor at the hidden end of the transition
    pub start: Option<f64>,
    pub opacity: Option<f64>,
}

/// `draw` transition defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DrawConfig {
    #[serde(flatten)]
    pub timing: TimingConfig,
    /// Path length drawn per millisecond, used when no duration is set
    pub speed: Option<f64>,
}

/// Crossfade defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CrossfadeConfig {
    #[serde(flatten)]
    pub timing: TimingConfig,
    /// Factor of the distance-derived duration, `sqrt(distance) * factor`.
    /// Ignored when `duration_ms` is set.
    pub distance_factor: Option<f64>,
}

impl MotionConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the default location (motion.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Mutable access to the timing block of every section.
    fn timings_mut(&mut self) -> [&mut TimingConfig; 7] {
        [
            &mut self.fade,
            &mut self.blur.timing,
            &mut self.fly.timing,
            &mut self.slide.timing,
            &mut self.scale.timing,
            &mut self.draw.timing,
            &mut self.crossfade.timing,
        ]
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values
    /// and apply to every transition section at once.
    pub fn merge_with_env(&mut self) {
        let delay = env_f64("MOTION_DELAY_MS");
        let duration = env_f64("MOTION_DURATION_MS");
        let easing = std::env::var("MOTION_EASING").ok();

        for timing in self.timings_mut() {
            if delay.is_some() {
                timing.delay_ms = delay;
            }
            if duration.is_some() {
                timing.duration_ms = duration;
            }
            if let Some(easing) = &easing {
                timing.easing = Some(easing.clone());
            }
        }

        if let Some(factor) = env_f64("MOTION_CROSSFADE_FACTOR") {
            self.crossfade.distance_factor = Some(factor);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from motion.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn env_f64(name: &str) -> Option<f64> {
    std::env::var(name).ok().and_then(|val| val.trim().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_empty() {
        let config = MotionConfig::default();
        assert_eq!(config.fade, TimingConfig::default());
        assert_eq!(config.crossfade.distance_factor, None);
        assert_eq!(config.draw.speed, None);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = MotionConfig::default();
        config.fly.x = Some("50%".to_string());
        config.crossfade.timing.easing = Some("cubic-out".to_string());

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: MotionConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[fade]
duration_ms = 250.0

[fly]
easing = "quad-out"
y = "-20px"

[crossfade]
distance_factor = 12.0
"#
        )
        .unwrap();

        let config = MotionConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.fade.duration_ms, Some(250.0));
        assert_eq!(config.fly.timing.easing.as_deref(), Some("quad-out"));
        assert_eq!(config.fly.y.as_deref(), Some("-20px"));
        assert_eq!(config.crossfade.distance_factor, Some(12.0));
        assert_eq!(config.blur, BlurConfig::default());
    }

    #[test]
    fn test_load_errors() {
        let missing = MotionConfig::load_from_file("/nonexistent/motion.toml");
        assert!(matches!(missing, Err(ConfigError::Read { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fade]\nduration_ms = \"slow\"").unwrap();
        let invalid = MotionConfig::load_from_file(file.path());
        assert!(matches!(invalid, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("MOTION_DURATION_MS", "120");
            std::env::set_var("MOTION_EASING", "linear");
            std::env::set_var("MOTION_CROSSFADE_FACTOR", "not-a-number");
        }

        let mut config = MotionConfig::default();
        config.crossfade.distance_factor = Some(20.0);
        config.merge_with_env();

        assert_eq!(config.fade.duration_ms, Some(120.0));
        assert_eq!(config.draw.timing.duration_ms, Some(120.0));
        assert_eq!(config.slide.timing.easing.as_deref(), Some("linear"));
        // Unparseable overrides leave the file value alone.
        assert_eq!(config.crossfade.distance_factor, Some(20.0));

        unsafe {
            std::env::remove_var("MOTION_DURATION_MS");
            std::env::remove_var("MOTION_EASING");
            std::env::remove_var("MOTION_CROSSFADE_FACTOR");
        }
    }
}
