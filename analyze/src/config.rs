use std::env;
use std::path::PathBuf;

/// путь к каталогу по умолчанию, относительно рабочей папки
pub const DEFAULT_CATALOG_PATH: &str = "src/UnicodeSearcher/Data/characters.json";

/// переменная окружения с путём к каталогу
pub const CATALOG_PATH_VAR: &str = "CHARACTERS_FILE";

/// формат вывода отчётов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat
{
    /// текстовые таблицы
    #[default]
    Table,
    /// один JSON-документ
    Json,
}

/// настройки запуска
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config
{
    pub catalog_path: PathBuf,
    pub output_format: OutputFormat,
    pub color_enabled: bool,
    pub verbose: bool,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            output_format: OutputFormat::Table,
            color_enabled: true,
            verbose: false,
        }
    }
}

impl Config
{
    /// настройки из переменных окружения процесса
    ///
    /// - `NO_COLOR`: отключить цвет (любое значение)
    ///
    /// путь к каталогу из `CHARACTERS_FILE` разбирает clap вместе с флагом `--file`
    pub fn from_env() -> Self
    {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// настройки из произвольного источника переменных
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if lookup("NO_COLOR").is_some() {
            config.color_enabled = false;
        }

        config
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self
    {
        self.catalog_path = path.into();
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self
    {
        self.output_format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self
    {
        self.verbose = verbose;
        self
    }

    /// проверка настроек
    pub fn validate(&self) -> Result<(), String>
    {
        if self.catalog_path.as_os_str().is_empty() {
            return Err("catalog path must not be empty".to_owned());
        }

        Ok(())
    }
}
