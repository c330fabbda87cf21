use std::collections::HashMap;

use serde::Serialize;

use crate::codepoint::format_code;
use crate::record::ResolvedCharacter;

/// записи одной категории каталога, в порядке появления
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a>
{
    pub name: &'a str,
    pub members: Vec<&'a ResolvedCharacter>,
}

impl<'a> CategoryGroup<'a>
{
    /// наименьший и наибольший разобранный кодпоинт группы, (0, 0) если таких нет
    pub fn code_bounds(&self) -> (u32, u32)
    {
        let mut codes = self.members.iter().filter(|c| c.is_resolved()).map(|c| c.code);

        match codes.next() {
            Some(first) => codes.fold((first, first), |(min, max), code| (min.min(code), max.max(code))),
            None => (0, 0),
        }
    }
}

/// сводка по категории каталога
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummaryEntry
{
    pub category: String,
    pub count: usize,
    /// диапазон кодпоинтов в виде "U+2190 - U+21FF"
    pub codepoint_range: String,
    /// первый встреченный символ категории
    pub sample: String,
    #[serde(skip)]
    pub min: u32,
    #[serde(skip)]
    pub max: u32,
}

/// группировка записей по категории
/// каждая запись попадает ровно в одну группу, группы идут в порядке первого появления
pub fn group_by_category(records: &[ResolvedCharacter]) -> Vec<CategoryGroup<'_>>
{
    let mut groups: Vec<CategoryGroup> = vec![];
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let name = record.category();

        let position = *index.entry(name).or_insert_with(|| {
            groups.push(CategoryGroup {
                name,
                members: vec![],
            });

            groups.len() - 1
        });

        groups[position].members.push(record);
    }

    groups
}

/// сводка по категориям, по убыванию количества записей
/// при равном количестве сохраняется порядок первого появления категории
pub fn summarize_categories(records: &[ResolvedCharacter]) -> Vec<CategorySummaryEntry>
{
    let mut summary: Vec<CategorySummaryEntry> = group_by_category(records)
        .iter()
        .map(|group| {
            let (min, max) = group.code_bounds();

            CategorySummaryEntry {
                category: group.name.to_owned(),
                count: group.members.len(),
                codepoint_range: format!("{} - {}", format_code(min), format_code(max)),
                sample: group
                    .members
                    .first()
                    .map(|c| c.record.character.clone())
                    .unwrap_or_default(),
                min,
                max,
            }
        })
        .collect();

    summary.sort_by(|a, b| b.count.cmp(&a.count));

    summary
}
