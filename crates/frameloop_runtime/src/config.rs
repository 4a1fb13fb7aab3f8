//! Supervisor configuration

use std::time::Duration;

use crate::error::ConfigError;
use crate::terminal::Output;

pub const DEFAULT_STEP: Duration = Duration::from_millis(100);

/// How a supervisor draws its animation.
#[derive(Debug, Clone)]
pub struct AnimateConfig {
    /// Delay before each frame.
    pub step: Duration,
    pub output: Output,
    /// When false the work runs with nothing drawn.
    pub enabled: bool,
}

impl Default for AnimateConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            output: Output::Stdout,
            enabled: true,
        }
    }
}

impl AnimateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    pub fn with_step_millis(mut self, millis: u64) -> Self {
        self.step = Duration::from_millis(millis);
        self
    }

    /// Fractional seconds, e.g. `0.05`.
    pub fn with_step_secs(mut self, secs: f64) -> Result<Self, ConfigError> {
        self.step = Duration::try_from_secs_f64(secs)
            .map_err(|_| ConfigError::InvalidStep(format!("{} is not a valid number of seconds", secs)))?;
        Ok(self)
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step.is_zero() {
            return Err(ConfigError::InvalidStep(
                "step must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Defaults overridden by `FRAMELOOP_STEP_MS`, `FRAMELOOP_DISABLE` and
    /// `FRAMELOOP_OUTPUT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("FRAMELOOP_STEP_MS") {
            let millis = value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid("FRAMELOOP_STEP_MS", &value))?;
            config.step = Duration::from_millis(millis);
        }

        if let Some(value) = lookup("FRAMELOOP_DISABLE") {
            config.enabled = !parse_flag(&value).ok_or_else(|| invalid("FRAMELOOP_DISABLE", &value))?;
        }

        if let Some(value) = lookup("FRAMELOOP_OUTPUT") {
            config.output = value
                .parse()
                .map_err(|_| invalid("FRAMELOOP_OUTPUT", &value))?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<AnimateConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AnimateConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = AnimateConfig::default();
        assert_eq!(config.step, Duration::from_millis(100));
        assert!(config.enabled);
        assert!(matches!(config.output, Output::Stdout));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AnimateConfig::new()
            .with_step_millis(20)
            .with_output(Output::Stderr)
            .with_enabled(false);
        assert_eq!(config.step, Duration::from_millis(20));
        assert!(matches!(config.output, Output::Stderr));
        assert!(!config.enabled);
    }

    #[test]
    fn test_zero_step_is_rejected() {
        let err = AnimateConfig::new().with_step(Duration::ZERO).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStep(_)));
    }

    #[test]
    fn test_step_secs() {
        let config = AnimateConfig::new().with_step_secs(0.05).unwrap();
        assert_eq!(config.step, Duration::from_millis(50));
        assert!(AnimateConfig::new().with_step_secs(-1.0).is_err());
        assert!(AnimateConfig::new().with_step_secs(f64::NAN).is_err());
    }

    #[test]
    fn test_from_env_overrides() {
        let config = from_pairs(&[
            ("FRAMELOOP_STEP_MS", "40"),
            ("FRAMELOOP_DISABLE", "1"),
            ("FRAMELOOP_OUTPUT", "stderr"),
        ])
        .unwrap();
        assert_eq!(config.step, Duration::from_millis(40));
        assert!(!config.enabled);
        assert!(matches!(config.output, Output::Stderr));
    }

    #[test]
    fn test_from_env_empty_uses_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.step, DEFAULT_STEP);
        assert!(config.enabled);
    }

    #[test]
    fn test_from_env_rejects_bad_values() {
        assert!(matches!(
            from_pairs(&[("FRAMELOOP_STEP_MS", "fast")]),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            from_pairs(&[("FRAMELOOP_STEP_MS", "0")]),
            Err(ConfigError::InvalidStep(_))
        ));
        assert!(matches!(
            from_pairs(&[("FRAMELOOP_OUTPUT", "printer")]),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            from_pairs(&[("FRAMELOOP_DISABLE", "maybe")]),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
