use std::io::{self, Write};

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use unicode_coverage::analysis::CoverageEntry;
use unicode_coverage::report::{CategoryDetail, CategoryGaps, CategoryOutcome, SummaryReport};

use super::format::{bar, format_code_list, rule, truncate};

/// сколько пропусков показывается в подробном отчёте по категории
pub const GAP_PREVIEW_LIMIT: usize = 3;
/// максимальная длина названия символа в таблице
const NAME_WIDTH: usize = 28;

#[derive(Tabled)]
struct CategoryRow
{
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Sample")]
    sample: String,
    #[tabled(rename = "Codepoint range")]
    range: String,
}

#[derive(Tabled)]
struct BlockRow
{
    #[tabled(rename = "Block")]
    block: String,
    #[tabled(rename = "Covered")]
    covered: u32,
    #[tabled(rename = "Total")]
    total: u32,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct MemberRow
{
    #[tabled(rename = "Char")]
    character: String,
    #[tabled(rename = "Codepoint")]
    codepoint: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

/// заголовок раздела
fn header(out: &mut impl Write, title: &str) -> io::Result<()>
{
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "{}", rule('='))
}

fn table<T: Tabled>(rows: Vec<T>) -> String
{
    Table::new(rows).with(Style::rounded()).to_string()
}

/// сводка по категориям
pub fn summary(out: &mut impl Write, total: usize, summary: &SummaryReport) -> io::Result<()>
{
    header(out, "📊 CHARACTER DATABASE SUMMARY")?;

    writeln!(out)?;
    writeln!(out, "Total characters: {}", total)?;
    writeln!(out, "Categories: {}", summary.category_count)?;
    writeln!(out)?;

    let rows = summary
        .categories
        .iter()
        .map(|entry| CategoryRow {
            category: entry.category.clone(),
            count: entry.count,
            sample: entry.sample.clone(),
            range: entry.codepoint_range.clone(),
        })
        .collect();

    writeln!(out, "{}", table::<CategoryRow>(rows))?;
    writeln!(out, "Total: {}", total)?;
    writeln!(out)
}

/// покрытие блоков Unicode
pub fn unicode_blocks(out: &mut impl Write, coverage: &[CoverageEntry]) -> io::Result<()>
{
    header(out, "📦 UNICODE BLOCK COVERAGE")?;
    writeln!(out)?;

    let rows = coverage
        .iter()
        .map(|entry| BlockRow {
            block: entry.block.clone(),
            covered: entry.covered,
            total: entry.total,
            percentage: format!("{:.1}%", entry.percentage),
            bar: bar(entry.percentage),
        })
        .collect();

    writeln!(out, "{}", table::<BlockRow>(rows))?;
    writeln!(out)
}

/// подробный отчёт по категории, либо сообщение о том, что её нет
pub fn category(out: &mut impl Write, outcome: &CategoryOutcome) -> io::Result<()>
{
    match outcome {
        CategoryOutcome::Found(detail) => category_detail(out, detail),
        CategoryOutcome::NotFound { category, known, .. } => {
            writeln!(out, "Category '{}' not found.", category)?;
            writeln!(out, "Available categories: {}", known.join(", "))
        }
    }
}

fn category_detail(out: &mut impl Write, detail: &CategoryDetail) -> io::Result<()>
{
    header(out, &format!("📂 CATEGORY: {}", detail.category))?;

    writeln!(out)?;
    writeln!(out, "{} characters", detail.total)?;
    writeln!(out)?;

    let rows = detail
        .members
        .iter()
        .map(|member| MemberRow {
            character: member.character.clone(),
            codepoint: member.codepoint.clone(),
            name: truncate(&member.name, NAME_WIDTH),
            tags: member.tags.join(", "),
        })
        .collect();

    writeln!(out, "{}", table::<MemberRow>(rows))?;

    if detail.remaining > 0 {
        writeln!(out)?;
        writeln!(out, "... and {} more", detail.remaining)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", rule('-'))?;
    writeln!(out, "Missing characters:")?;

    if detail.gaps.is_empty() {
        writeln!(out, "  No ranges defined for analysis.")?;
    }

    for gap in detail.gaps.iter().take(GAP_PREVIEW_LIMIT) {
        writeln!(out, "  - {}: {} missing", gap.range.label(), gap.missing_count)?;
        writeln!(out, "    e.g. {}", format_code_list(&gap.sample_missing))?;
    }

    writeln!(out)
}

/// пропуски по всем категориям таблицы диапазонов
pub fn gaps(out: &mut impl Write, sweep: &[CategoryGaps]) -> io::Result<()>
{
    header(out, "🔍 GAP ANALYSIS")?;
    writeln!(out)?;

    for category in sweep {
        writeln!(out, "📁 {}:", category.category)?;

        for gap in category.gaps.iter() {
            writeln!(out, "   {}: {} missing", gap.range.label(), gap.missing_count)?;
        }

        writeln!(out)?;
    }

    Ok(())
}
