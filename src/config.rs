//! Настройки приложения: язык интерфейса и каталог языковых пакетов.
//! Хранятся в config.toml рядом с исполняемым файлом.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Настройки приложения.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Код языка интерфейса: auto/ru/ru-ru/en/en-us
    pub language: String,
    /// Каталог языковых пакетов (по умолчанию locales/)
    pub language_pack_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
        }
    }
}

/// Ошибки загрузки/сохранения настроек.
#[derive(Debug)]
pub enum ConfigError {
    /// Ошибка файлового ввода-вывода
    Io(std::io::Error),
    /// Ошибка разбора TOML
    Serde(toml::de::Error),
    /// Ошибка сериализации TOML
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "ошибка ввода-вывода: {e}"),
            ConfigError::Serde(e) => write!(f, "ошибка разбора настроек: {e}"),
            ConfigError::Serialize(e) => write!(f, "ошибка сериализации настроек: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// Загружает config.toml или создаёт файл с настройками по умолчанию.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// Сохраняет настройки в config.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
