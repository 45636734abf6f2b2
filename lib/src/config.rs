use crate::error::{AsciiError, Result};
use crate::terminal::ConsoleSize;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone)]
pub struct AsciiConfig {
    /// Console size used when the terminal cannot be queried, default 80x24
    pub fallback_size: ConsoleSize,

    /// Let the finishing step enlarge images smaller than the console, default false
    pub allow_upscale: bool,

    /// Clear the screen before printing, default true
    pub clear_screen: bool,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            fallback_size: ConsoleSize::default(),
            allow_upscale: false,
            clear_screen: true,
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let ConsoleSize { width, height } = self.fallback_size;
        if width == 0 || height == 0 {
            return Err(AsciiError::InvalidConfig(format!(
                "fallback console size must be non-zero, got {}x{}",
                width, height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AsciiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallback_size, ConsoleSize::new(80, 24));
        assert!(!config.allow_upscale);
        assert!(config.clear_screen);
    }

    #[test]
    fn test_invalid_fallback_size() {
        let mut config = AsciiConfig::default();
        config.fallback_size = ConsoleSize::new(0, 24);
        assert!(matches!(
            config.validate(),
            Err(AsciiError::InvalidConfig(_))
        ));

        config.fallback_size = ConsoleSize::new(80, 0);
        assert!(config.validate().is_err());
    }
}
