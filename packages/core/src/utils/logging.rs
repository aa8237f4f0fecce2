// Логирование

use tracing_subscriber::EnvFilter;

/// Уровень по умолчанию, если RUST_LOG не задан
const DEFAULT_FILTER: &str = "info";

/// Инициализировать tracing subscriber (fmt + RUST_LOG)
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Повторная инициализация (например, в тестах) не считается ошибкой
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
