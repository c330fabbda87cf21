use serde::Serialize;
use tracing::debug;

use crate::analysis::{analyze_coverage, find_gaps, group_by_category, summarize_categories};
use crate::analysis::{CategorySummaryEntry, CoverageEntry, GapEntry};
use crate::error::UnknownCategory;
use crate::record::{Catalog, ResolvedCharacter};
use crate::tables::{category_names, UNICODE_BLOCKS};

/// сколько записей категории выводится в подробном отчёте
pub const MEMBER_LIMIT: usize = 50;
/// сколько тегов записи выводится в подробном отчёте
pub const TAG_LIMIT: usize = 2;

/// какие отчёты нужно построить
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection
{
    pub summary: bool,
    pub unicode_blocks: bool,
    pub category: Option<String>,
    pub gaps: bool,
}

impl Selection
{
    /// если ничего не выбрано - строится сводка
    pub fn or_default_summary(mut self) -> Self
    {
        if !self.summary && !self.unicode_blocks && self.category.is_none() && !self.gaps {
            self.summary = true;
        }

        self
    }
}

/// сводка по каталогу
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport
{
    pub category_count: usize,
    pub categories: Vec<CategorySummaryEntry>,
}

/// запись в подробном отчёте по категории
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberEntry
{
    #[serde(rename = "char")]
    pub character: String,
    pub codepoint: String,
    pub name: String,
    pub tags: Vec<String>,
}

/// подробный отчёт по категории каталога
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDetail
{
    pub category: String,
    pub total: usize,
    /// первые записи по возрастанию кодпоинта
    pub members: Vec<MemberEntry>,
    /// сколько записей не попало в members
    pub remaining: usize,
    pub gaps: Vec<GapEntry>,
}

/// пропуски одной категории таблицы диапазонов
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGaps
{
    pub category: String,
    pub gaps: Vec<GapEntry>,
}

/// результат подробного отчёта в структурированном выводе
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CategoryOutcome
{
    Found(CategoryDetail),
    NotFound
    {
        error: String,
        category: String,
        known: Vec<String>,
    },
}

impl From<Result<CategoryDetail, UnknownCategory>> for CategoryOutcome
{
    fn from(result: Result<CategoryDetail, UnknownCategory>) -> Self
    {
        match result {
            Ok(detail) => Self::Found(detail),
            Err(unknown) => Self::NotFound {
                error: unknown.to_string(),
                category: unknown.category,
                known: unknown.known,
            },
        }
    }
}

/// набор отчётов одного запуска
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSet
{
    pub total: usize,
    #[serde(flatten)]
    pub summary: Option<SummaryReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_coverage: Option<Vec<CoverageEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaps: Option<Vec<CategoryGaps>>,
}

/// каталог с однократно разобранными кодпоинтами
pub struct Analysis
{
    records: Vec<ResolvedCharacter>,
}

impl Analysis
{
    pub fn new(catalog: &Catalog) -> Self
    {
        let records = catalog.resolve();

        debug!(
            total = records.len(),
            unresolved = records.iter().filter(|c| !c.is_resolved()).count(),
            "catalog resolved"
        );

        Self { records }
    }

    pub fn records(&self) -> &[ResolvedCharacter]
    {
        &self.records
    }

    pub fn total(&self) -> usize
    {
        self.records.len()
    }

    /// сводка по категориям
    pub fn summary(&self) -> SummaryReport
    {
        let categories = summarize_categories(&self.records);

        SummaryReport {
            category_count: categories.len(),
            categories,
        }
    }

    /// покрытие блоков Unicode
    pub fn unicode_blocks(&self) -> Vec<CoverageEntry>
    {
        analyze_coverage(&self.records, UNICODE_BLOCKS)
    }

    /// подробный отчёт по категории каталога
    pub fn category_detail(&self, category: &str) -> Result<CategoryDetail, UnknownCategory>
    {
        let groups = group_by_category(&self.records);

        let group = match groups.iter().find(|group| group.name == category) {
            Some(group) => group,
            None => {
                let mut known: Vec<String> = groups.iter().map(|group| group.name.to_owned()).collect();
                known.sort();

                return Err(UnknownCategory::new(category, known));
            }
        };

        let mut sorted = group.members.clone();
        sorted.sort_by_key(|c| c.code);

        let members = sorted
            .iter()
            .take(MEMBER_LIMIT)
            .map(|c| MemberEntry {
                character: c.record.character.clone(),
                codepoint: c.record.codepoint.clone(),
                name: c.record.name().to_owned(),
                tags: c
                    .record
                    .display_tags(TAG_LIMIT)
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            })
            .collect();

        let gaps = find_gaps(&self.records, Some(category));

        debug!(category, total = sorted.len(), gaps = gaps.len(), "category detail");

        Ok(CategoryDetail {
            category: category.to_owned(),
            total: sorted.len(),
            members,
            remaining: sorted.len().saturating_sub(MEMBER_LIMIT),
            gaps,
        })
    }

    /// пропуски по всем категориям таблицы диапазонов, в алфавитном порядке
    /// категории без пропусков не выводятся
    pub fn gap_sweep(&self) -> Vec<CategoryGaps>
    {
        category_names()
            .into_iter()
            .filter_map(|category| {
                let gaps = find_gaps(&self.records, Some(category));

                debug!(category, gaps = gaps.len(), "gap sweep");

                match gaps.is_empty() {
                    true => None,
                    false => Some(CategoryGaps {
                        category: category.to_owned(),
                        gaps,
                    }),
                }
            })
            .collect()
    }

    /// построить выбранные отчёты
    pub fn run(&self, selection: &Selection) -> ReportSet
    {
        ReportSet {
            total: self.total(),
            summary: selection.summary.then(|| self.summary()),
            unicode_coverage: selection.unicode_blocks.then(|| self.unicode_blocks()),
            category: selection
                .category
                .as_deref()
                .map(|category| self.category_detail(category).into()),
            gaps: selection.gaps.then(|| self.gap_sweep()),
        }
    }
}
