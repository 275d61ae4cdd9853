//! Detection configuration

use serde::{Deserialize, Serialize};

/// Language of the kinship terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English terms ("paternal grandfather")
    #[default]
    #[serde(rename = "en")]
    English,

    /// Vietnamese terms ("ông nội")
    #[serde(rename = "vi")]
    Vietnamese,
}

impl Locale {
    /// Get the locale code
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Vietnamese => "vi",
        }
    }

    /// Parse a locale code
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "vi" | "vietnamese" => Some(Locale::Vietnamese),
            _ => None,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid locale: {}", s))
    }
}

/// Configuration for relationship detection
///
/// # Examples
///
/// ```
/// use kindred_engine::{DetectionConfig, Locale};
///
/// let config = DetectionConfig::default();
/// assert_eq!(config.locale, Locale::English);
/// assert_eq!(config.max_generation_span, 8);
///
/// // Only close family gets a name
/// let config = DetectionConfig::strict();
/// assert_eq!(config.max_generation_span, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Language of the produced terms
    /// Default: English
    #[serde(default)]
    pub locale: Locale,

    /// Largest number of generations climbed or descended that still gets a term
    /// Longer chains are reported as "unknown"
    /// Default: 8
    #[serde(default = "default_max_generation_span")]
    pub max_generation_span: u8,
}

fn default_max_generation_span() -> u8 {
    8
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            max_generation_span: default_max_generation_span(),
        }
    }
}

impl DetectionConfig {
    /// Name relations up to great-grandparents and great-grandchildren only
    pub fn strict() -> Self {
        Self {
            max_generation_span: 4,
            ..Self::default()
        }
    }

    /// Name distant relations as well
    pub fn lenient() -> Self {
        Self {
            max_generation_span: 12,
            ..Self::default()
        }
    }

    /// Same configuration with another locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectionConfig::default();
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.max_generation_span, 8);
    }

    #[test]
    fn test_presets() {
        let default_span = DetectionConfig::default().max_generation_span;
        assert!(DetectionConfig::strict().max_generation_span < default_span);
        assert!(DetectionConfig::lenient().max_generation_span > default_span);
    }

    #[test]
    fn test_parse_toml() {
        let config: DetectionConfig = toml::from_str(
            r#"
            locale = "vi"
            max_generation_span = 5
        "#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::Vietnamese);
        assert_eq!(config.max_generation_span, 5);

        let empty: DetectionConfig = toml::from_str("").unwrap();
        assert_eq!(empty, DetectionConfig::default());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = DetectionConfig::lenient().with_locale(Locale::Vietnamese);
        let serialized = serde_json::to_string(&config).unwrap();
        assert!(serialized.contains("\"vi\""));
        let deserialized: DetectionConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::English));
        assert_eq!(Locale::parse("vietnamese"), Some(Locale::Vietnamese));
        assert!("fr".parse::<Locale>().is_err());
    }
}
