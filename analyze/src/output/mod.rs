use std::io::{self, Write};

use unicode_coverage::ReportSet;

use crate::config::OutputFormat;

mod format;
mod text;

pub use text::GAP_PREVIEW_LIMIT;

/// вывести отчёты в выбранном формате
pub fn write(report: &ReportSet, format: OutputFormat, out: &mut impl Write) -> io::Result<()>
{
    match format {
        OutputFormat::Json => write_json(report, out),
        OutputFormat::Table => write_text(report, out),
    }
}

/// один JSON-документ со всеми выбранными отчётами
fn write_json(report: &ReportSet, out: &mut impl Write) -> io::Result<()>
{
    let json = serde_json::to_string_pretty(report).map_err(io::Error::from)?;

    writeln!(out, "{}", json)
}

/// текстовые отчёты в порядке: сводка, блоки, категория, пропуски
fn write_text(report: &ReportSet, out: &mut impl Write) -> io::Result<()>
{
    if let Some(summary) = &report.summary {
        text::summary(out, report.total, summary)?;
    }

    if let Some(coverage) = &report.unicode_coverage {
        text::unicode_blocks(out, coverage)?;
    }

    if let Some(outcome) = &report.category {
        text::category(out, outcome)?;
    }

    if let Some(sweep) = &report.gaps {
        text::gaps(out, sweep)?;
    }

    Ok(())
}
