use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_base_url() -> String {
    "https://api.aladhan.com/v1".to_string()
}
fn default_country() -> String {
    "Turkey".to_string()
}
fn default_method() -> u8 {
    // Diyanet İşleri Başkanlığı
    13
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_city() -> String {
    "İstanbul".to_string()
}
fn default_true() -> bool {
    true
}
fn default_utc_offset() -> i32 {
    180
}
fn default_ramadan_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 18).unwrap_or_default()
}
fn default_ramadan_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 19).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(anyhow!("Unknown theme '{}'. Use: dark, light", s)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_method")]
    pub method: u8,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            country: default_country(),
            method: default_method(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Used when no position can be determined.
    #[serde(default = "default_city")]
    pub default_city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Ask an IP geolocation service when no coordinates are configured.
    #[serde(default = "default_true")]
    pub ip_lookup: bool,
    /// API times are local to Türkiye; the countdown is measured at this offset.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i32,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            latitude: None,
            longitude: None,
            ip_lookup: true,
            utc_offset_minutes: default_utc_offset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamadanConfig {
    /// First day of fasting (day 1).
    #[serde(default = "default_ramadan_start")]
    pub start: NaiveDate,
    /// Last day of fasting, inclusive.
    #[serde(default = "default_ramadan_end")]
    pub end: NaiveDate,
}

impl Default for RamadanConfig {
    fn default() -> Self {
        Self {
            start: default_ramadan_start(),
            end: default_ramadan_end(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub ramadan: RamadanConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "vakit").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    /// Configured coordinates, if both halves are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.ui.theme, Theme::Dark);
        assert_eq!(config.api.method, 13);
        assert_eq!(config.api.country, "Turkey");
        assert_eq!(config.location.default_city, "İstanbul");
        assert_eq!(config.ramadan.start, NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
        assert_eq!(config.ramadan.end, NaiveDate::from_ymd_opt(2026, 3, 19).unwrap());
        assert!(config.coordinates().is_none());
    }

    #[test]
    fn theme_preference_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.ui.theme = config.ui.theme.toggled();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.ui.theme, Theme::Light);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[location]\nlatitude = 39.92\nlongitude = 32.85\n\n[ui]\ntheme = \"light\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.coordinates(), Some((39.92, 32.85)));
        assert_eq!(config.ui.theme, Theme::Light);
        assert!(config.location.ip_lookup);
        assert_eq!(config.location.utc_offset_minutes, 180);
    }

    #[test]
    fn theme_parses_from_cli_words() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
