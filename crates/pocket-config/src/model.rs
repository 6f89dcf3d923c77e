use serde::{Deserialize, Serialize};

use pocket_domain::{CategoryFilter, FeedOrder};

use crate::ConfigError;

/// Stores user-configurable feed and CLI preferences.
///
/// Missing fields fall back to [`Config::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub feed_order: FeedOrder,
    pub default_filter: CategoryFilter,
    pub ui_color_enabled: bool,
    pub accessibility: AccessibilitySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            feed_order: FeedOrder::default(),
            default_filter: CategoryFilter::All,
            ui_color_enabled: Self::default_ui_color_enabled(),
            accessibility: AccessibilitySettings::default(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 7] = [
        "locale",
        "currency",
        "feed_order",
        "default_filter",
        "ui_color_enabled",
        "plain_output",
        "high_contrast",
    ];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Color is suppressed by either the toggle or plain output.
    pub fn use_color(&self) -> bool {
        self.ui_color_enabled && !self.accessibility.plain_output
    }

    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "locale" => self.locale = non_empty(key, value)?.to_string(),
            "currency" => self.currency = non_empty(key, value)?.to_ascii_uppercase(),
            "feed_order" => self.feed_order = value.parse()?,
            "default_filter" => self.default_filter = value.parse()?,
            "ui_color_enabled" => self.ui_color_enabled = parse_flag(key, value)?,
            "plain_output" => self.accessibility.plain_output = parse_flag(key, value)?,
            "high_contrast" => self.accessibility.high_contrast = parse_flag(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Returns `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("locale", self.locale.clone()),
            ("currency", self.currency.clone()),
            ("feed_order", self.feed_order.to_string()),
            ("default_filter", self.default_filter.to_string()),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
            ("plain_output", self.accessibility.plain_output.to_string()),
            ("high_contrast", self.accessibility.high_contrast.to_string()),
        ]
    }
}

fn non_empty<'v>(key: &str, value: &'v str) -> Result<&'v str, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}
