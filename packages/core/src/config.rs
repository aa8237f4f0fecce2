//! Централизованная конфигурация конвертера
//!
//! Все лимиты и сетевые настройки определены здесь,
//! чтобы избежать хардкода по всему проекту.

use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Глобальная конфигурация приложения (синглтон)
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Основная структура конфигурации
#[derive(Debug, Clone)]
pub struct Config {
    // ============================================
    // СЕТЕВЫЕ ПАРАМЕТРЫ
    // ============================================

    /// Адрес, на котором HTTP сервер принимает соединения
    pub listen_addr: String,

    // ============================================
    // ВАЛИДАЦИЯ
    // ============================================

    /// Максимальная длина входного значения (в символах)
    pub max_input_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            max_input_length: 1024,
        }
    }
}

impl Config {
    /// Создать конфигурацию из переменных окружения
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Переопределяем значения из env, если они заданы
        if let Ok(val) = std::env::var("CONVERTER_LISTEN_ADDR") {
            if !val.trim().is_empty() {
                config.listen_addr = val.trim().to_string();
            }
        }

        if let Some(parsed) = parse_env("CONVERTER_MAX_INPUT_LENGTH") {
            config.max_input_length = parsed;
        }

        config
    }

    /// Получить глобальный экземпляр конфигурации
    ///
    /// Автоматически инициализирует конфигурацию со значениями по умолчанию при первом вызове
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::default)
    }

    /// Инициализировать глобальную конфигурацию со значениями по умолчанию
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init() -> Result<(), &'static str> {
        Self::init_with(Self::default())
    }

    /// Инициализировать глобальную конфигурацию из переменных окружения
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init_from_env() -> Result<(), &'static str> {
        Self::init_with(Self::from_env())
    }

    /// Инициализировать глобальную конфигурацию с кастомным экземпляром
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init_with(config: Config) -> Result<(), &'static str> {
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| "Config already initialized")
    }

    /// Проверить, инициализирована ли глобальная конфигурация
    pub fn is_initialized() -> bool {
        GLOBAL_CONFIG.get().is_some()
    }
}

/// Прочитать и разобрать переменную окружения.
/// Неразбираемое значение логируется и игнорируется.
fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(
                target: "converter::config",
                var = name,
                value = %raw,
                "Ignoring unparseable environment value, keeping default"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.max_input_length, 1024);
    }

    // Единственный тест, трогающий эти переменные окружения
    #[test]
    fn test_from_env() {
        std::env::set_var("CONVERTER_LISTEN_ADDR", " 127.0.0.1:9000 ");
        std::env::set_var("CONVERTER_MAX_INPUT_LENGTH", "64");
        let config = Config::from_env();
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.max_input_length, 64);

        std::env::set_var("CONVERTER_MAX_INPUT_LENGTH", "lots");
        let config = Config::from_env();
        assert_eq!(config.max_input_length, 1024);

        std::env::remove_var("CONVERTER_LISTEN_ADDR");
        std::env::remove_var("CONVERTER_MAX_INPUT_LENGTH");
        let config = Config::from_env();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
    }

    // Единственный тест, трогающий глобальный синглтон
    #[test]
    fn test_global_singleton() {
        let _ = Config::init();
        assert!(Config::is_initialized());
        assert_eq!(Config::init(), Err("Config already initialized"));
        assert_eq!(
            Config::init_with(Config::default()),
            Err("Config already initialized")
        );
        assert_eq!(Config::global().max_input_length, 1024);
    }
}
