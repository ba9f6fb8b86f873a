use crate::error::RleError;
use std::str::FromStr;

/// How the decoder reacts when input ends inside a record payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Fail with `RleError::MalformedStream`.
    #[default]
    Strict,
    /// Emit whatever payload was present and stop.
    Lenient,
}

pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct CodecConfig {
    pub truncation: TruncationPolicy,
    pub buffer_size: usize,
    pub show_progress: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            truncation: TruncationPolicy::Strict,
            buffer_size: DEFAULT_BUFFER_SIZE,
            show_progress: false,
        }
    }
}

impl CodecConfig {
    pub fn with_truncation(mut self, truncation: TruncationPolicy) -> Self {
        self.truncation = truncation;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn validate(&self) -> Result<(), RleError> {
        if self.buffer_size == 0 {
            return Err(RleError::ConfigError("buffer size must be non-zero".to_string()));
        }
        Ok(())
    }
}

impl FromStr for TruncationPolicy {
    type Err = RleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(TruncationPolicy::Strict),
            "lenient" => Ok(TruncationPolicy::Lenient),
            _ => Err(RleError::ConfigError(format!("Invalid truncation policy: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!("strict".parse::<TruncationPolicy>().unwrap(), TruncationPolicy::Strict);
        assert_eq!("Lenient".parse::<TruncationPolicy>().unwrap(), TruncationPolicy::Lenient);
        assert!("sloppy".parse::<TruncationPolicy>().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(CodecConfig::default().validate().is_ok());
        let config = CodecConfig::default().with_buffer_size(0);
        assert!(matches!(config.validate(), Err(RleError::ConfigError(_))));
    }
}
