use std::env;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// уровень логирования по умолчанию, если не задан RUST_LOG
pub fn default_level(verbose: bool) -> Level
{
    match verbose {
        true => Level::DEBUG,
        false => Level::WARN,
    }
}

/// фильтр из значения RUST_LOG; отсутствующее или некорректное значение заменяется уровнем по умолчанию
pub fn filter(directives: Option<&str>, verbose: bool) -> EnvFilter
{
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level(verbose).to_string()))
}

/// логи пишутся в stderr, чтобы не смешиваться с JSON в stdout
/// вызывается один раз, из main
pub fn init(verbose: bool)
{
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(filter(directives.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests
{
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn default_levels()
    {
        assert_eq!(default_level(false), Level::WARN);
        assert_eq!(default_level(true), Level::DEBUG);
    }

    #[test]
    fn verbose_flag_without_rust_log()
    {
        assert_eq!(filter(None, false).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(filter(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn rust_log_wins()
    {
        assert_eq!(filter(Some("info"), true).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(filter(Some("trace"), false).max_level_hint(), Some(LevelFilter::TRACE));
    }
}
