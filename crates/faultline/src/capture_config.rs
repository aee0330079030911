//! Stack capture configuration.
//!
//! Capture settings can be loaded from TOML and the environment:
//! - Built-in defaults (capture on, depth 32)
//! - `./faultline.toml` if present
//! - `FAULTLINE_ENABLED` / `FAULTLINE_DEPTH` environment variables, highest
//!   precedence

use config::{Config, Environment, File, FileFormat};
use faultline_error::{ConfigError, FaultlineError, FaultlineResult};
use faultline_stack::{set_stack_capture_enabled, CapturePolicy, MAX_DEPTH};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Whether and how deep errors capture the call stack.
///
/// # Example
///
/// ```toml
/// enabled = true
/// depth = 16
/// ```
///
/// ```
/// use faultline::CaptureConfig;
///
/// let config = CaptureConfig::from_toml("depth = 8").unwrap();
/// assert!(*config.enabled());
/// assert_eq!(*config.depth(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct CaptureConfig {
    /// Capture stacks at all (default true).
    #[serde(default = "default_enabled")]
    enabled: bool,

    /// Frames recorded per error, 1 to 32 (default 32).
    #[serde(default = "default_depth")]
    depth: usize,
}

fn default_enabled() -> bool {
    true
}

fn default_depth() -> usize {
    MAX_DEPTH
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            depth: default_depth(),
        }
    }
}

impl CaptureConfig {
    /// Creates a configuration from explicit values.
    pub fn new(enabled: bool, depth: usize) -> Self {
        Self { enabled, depth }
    }

    /// Checks that the depth is within `1..=MAX_DEPTH`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending depth.
    pub fn validate(&self) -> FaultlineResult<()> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::new(format!(
                "Stack depth must be in 1..={}, got {}",
                MAX_DEPTH, self.depth
            ))
            .into());
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML, has unknown keys,
    /// or fails [`CaptureConfig::validate`].
    pub fn from_toml(source: &str) -> FaultlineResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    /// Loads and validates configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> FaultlineResult<Self> {
        debug!("Loading capture configuration from file");
        Self::build(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Loads configuration with precedence: environment > `./faultline.toml`
    /// > defaults.
    ///
    /// The file is optional and silently skipped when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed.
    #[instrument]
    pub fn load() -> FaultlineResult<Self> {
        debug!("Loading capture configuration: environment > ./faultline.toml > defaults");
        let builder = Config::builder()
            .add_source(File::with_name("faultline").required(false))
            .add_source(Environment::with_prefix("FAULTLINE").try_parsing(true));
        Self::build(builder)
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> FaultlineResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                FaultlineError::from(ConfigError::new(format!(
                    "Failed to build capture configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FaultlineError::from(ConfigError::new(format!(
                    "Failed to parse capture configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        debug!(enabled = config.enabled, depth = config.depth, "Capture configuration loaded");
        Ok(config)
    }

    /// Sets the process-wide capture switch from `enabled`.
    ///
    /// Depth only applies through [`CaptureConfig::policy`]; the global
    /// policy always records up to `MAX_DEPTH` frames.
    pub fn apply(&self) {
        set_stack_capture_enabled(self.enabled);
    }

    /// A capture policy with these settings, independent of the process-wide
    /// switch.
    pub fn policy(&self) -> CapturePolicy {
        CapturePolicy::fixed(self.enabled).with_depth(self.depth)
    }
}
