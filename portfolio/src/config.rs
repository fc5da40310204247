//! Site configuration.
//!
//! The configuration lives in `site.toml` next to the crate manifest and is
//! embedded at build time, so a static deploy needs no extra files. Every
//! field has a default, so a partial file only overrides what it names.

use serde::Deserialize;
use std::time::Duration;

use crate::error::ConfigError;
use crate::typewriter::{self, Timing};

const EMBEDDED: &str = include_str!("../site.toml");

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the nav brand, hero and footer
    pub owner: String,
    /// One-line introduction under the animated role
    pub tagline: String,
    /// Fixed external resume document, opened in a new tab
    pub resume_url: String,
    /// `tracing` level directive for the console logger
    pub log_level: String,
    pub typewriter: TypewriterConfig,
    pub contact: ContactConfig,
}

/// Role animation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub roles: Vec<String>,
    pub type_speed_ms: u64,
    pub delete_speed_ms: u64,
    /// Pause once a role is fully typed
    pub pause_before_delete_ms: u64,
    /// Pause once a role is fully deleted
    pub pause_before_type_ms: u64,
}

/// Contact form settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// How long the "message sent" notice stays visible
    pub success_notice_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Raj Savita".into(),
            tagline: "A passionate developer focused on building engaging and efficient web applications."
                .into(),
            resume_url: "https://www.africau.edu/images/default/sample.pdf".into(),
            log_level: "info".into(),
            typewriter: TypewriterConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            roles: vec![
                "Aspiring Developer".into(),
                "Problem Solver".into(),
                "Frontend Enthusiast".into(),
                "Quick Learner".into(),
            ],
            type_speed_ms: 100,
            delete_speed_ms: 50,
            pause_before_delete_ms: 1500,
            pause_before_type_ms: 500,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            success_notice_ms: 5000,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration embedded at build time.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.typewriter.validate()?;
        if self.contact.success_notice_ms == 0 {
            return Err(ConfigError::ZeroDuration("contact.success_notice_ms"));
        }
        Ok(())
    }

    pub fn success_notice(&self) -> Duration {
        Duration::from_millis(self.contact.success_notice_ms)
    }
}

impl TypewriterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        typewriter::check_roles(&self.roles)?;
        let durations = [
            ("typewriter.type_speed_ms", self.type_speed_ms),
            ("typewriter.delete_speed_ms", self.delete_speed_ms),
            ("typewriter.pause_before_delete_ms", self.pause_before_delete_ms),
            ("typewriter.pause_before_type_ms", self.pause_before_type_ms),
        ];
        for (key, value) in durations {
            if value == 0 {
                return Err(ConfigError::ZeroDuration(key));
            }
        }
        Ok(())
    }

    pub fn timing(&self) -> Timing {
        Timing {
            type_speed: Duration::from_millis(self.type_speed_ms),
            delete_speed: Duration::from_millis(self.delete_speed_ms),
            pause_before_delete: Duration::from_millis(self.pause_before_delete_ms),
            pause_before_type: Duration::from_millis(self.pause_before_type_ms),
        }
    }
}
