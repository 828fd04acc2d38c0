//! Settings Types
//!
//! Choice values offered by the settings dialog selects.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid refresh rate '{0}' (1, 5, 15, 30, 60)")]
    InvalidRefreshRate(String),

    #[error("unsupported language '{0}'")]
    InvalidLanguage(String),

    #[error("invalid data retention '{0}' (7, 14, 30, 60, 90)")]
    InvalidRetention(String),
}

/// Dashboard refresh interval in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRate(u32);

impl RefreshRate {
    pub const CHOICES: [u32; 5] = [1, 5, 15, 30, 60];

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl Default for RefreshRate {
    fn default() -> Self {
        Self(5)
    }
}

impl FromStr for RefreshRate {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .filter(|m| Self::CHOICES.contains(m))
            .map(Self)
            .ok_or_else(|| SettingsError::InvalidRefreshRate(s.to_string()))
    }
}

/// Log retention in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRetention(u32);

impl DataRetention {
    pub const CHOICES: [u32; 5] = [7, 14, 30, 60, 90];

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl Default for DataRetention {
    fn default() -> Self {
        Self(30)
    }
}

impl FromStr for DataRetention {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .filter(|d| Self::CHOICES.contains(d))
            .map(Self)
            .ok_or_else(|| SettingsError::InvalidRetention(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Japanese,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
            Language::Japanese => "japanese",
        }
    }
}

impl FromStr for Language {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(Language::English),
            "spanish" => Ok(Language::Spanish),
            "french" => Ok(Language::French),
            "german" => Ok(Language::German),
            "japanese" => Ok(Language::Japanese),
            _ => Err(SettingsError::InvalidLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
