use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::debug;
use unicode_coverage::{Analysis, Selection};
use unicode_coverage_analyze::config::{Config, OutputFormat, CATALOG_PATH_VAR};
use unicode_coverage_analyze::{catalog, logging, output};

/// анализ каталога символов: сводка по категориям, покрытие блоков Unicode, пропуски
#[derive(Parser, Debug)]
#[command(name = "analyze-characters")]
#[command(version, about = "Character catalog coverage analyzer", long_about = None)]
struct Cli
{
    /// Overall summary by category (default)
    #[arg(long)]
    summary: bool,

    /// Detailed report for one category
    #[arg(long, value_name = "NAME")]
    category: Option<String>,

    /// Missing code points per category range
    #[arg(long)]
    gaps: bool,

    /// Coverage per Unicode block
    #[arg(long)]
    unicode_blocks: bool,

    /// Print a single JSON document instead of tables
    #[arg(long)]
    json: bool,

    /// Path to characters.json (default: src/UnicodeSearcher/Data/characters.json)
    #[arg(long, value_name = "PATH", env = CATALOG_PATH_VAR)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli
{
    fn selection(&self) -> Selection
    {
        Selection {
            summary: self.summary,
            unicode_blocks: self.unicode_blocks,
            category: self.category.clone(),
            gaps: self.gaps,
        }
        .or_default_summary()
    }

    fn config(&self) -> Config
    {
        let mut config = Config::from_env().with_verbose(self.verbose);

        if let Some(path) = &self.file {
            config = config.with_catalog_path(path);
        }

        if self.json {
            config = config.with_output_format(OutputFormat::Json);
        }

        config
    }
}

fn main() -> Result<()>
{
    let cli = Cli::parse();
    let config = cli.config();

    logging::init(config.verbose);
    config.validate().map_err(|e| anyhow!(e))?;

    if !config.color_enabled {
        colored::control::set_override(false);
    }

    let selection = cli.selection();
    debug!(?selection, path = %config.catalog_path.display(), "starting analysis");

    let catalog = catalog::load(&config.catalog_path)?;
    let report = Analysis::new(&catalog).run(&selection);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    output::write(&report, config.output_format, &mut out).context("failed to write report")?;
    out.flush().context("failed to write report")?;

    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn catalog_path_comes_from_environment()
    {
        let command = Cli::command();
        let file = command
            .get_arguments()
            .find(|arg| arg.get_id() == "file")
            .unwrap();

        assert_eq!(file.get_env(), Some(OsStr::new("CHARACTERS_FILE")));
    }

    #[test]
    fn file_flag_sets_catalog_path()
    {
        let cli = Cli::try_parse_from(["analyze-characters", "--file", "chars.json", "--json"]).unwrap();
        let config = cli.config();

        assert_eq!(config.catalog_path, PathBuf::from("chars.json"));
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn summary_is_the_default_report()
    {
        let cli = Cli::try_parse_from(["analyze-characters", "--file", "chars.json"]).unwrap();

        assert!(cli.selection().summary);
        assert_eq!(cli.selection().category, None);
    }
}
