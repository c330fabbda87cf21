use std::collections::BTreeSet;

use serde::Serialize;

use super::distinct_codes;
use crate::codepoint::serialize_codes;
use crate::properties::is_plausible_gap;
use crate::record::ResolvedCharacter;
use crate::tables::{block_ranges, category_ranges, CodeRange};

/// сколько отсутствующих кодпоинтов приводить в качестве примера
pub const SAMPLE_LIMIT: usize = 5;

/// пропуски каталога в пределах одного диапазона
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapEntry
{
    pub range: CodeRange,
    /// количество отсутствующих правдоподобных кодпоинтов
    pub missing_count: usize,
    /// первые отсутствующие кодпоинты, по возрастанию
    #[serde(serialize_with = "serialize_codes")]
    pub sample_missing: Vec<u32>,
}

/// пропуски каталога, при необходимости - только по одной категории
///
/// если категория есть в таблице категорий, проверяются её диапазоны, иначе - все блоки Unicode.
/// учитываются только записи этой категории
pub fn find_gaps(records: &[ResolvedCharacter], category: Option<&str>) -> Vec<GapEntry>
{
    let ranges = match category.and_then(category_ranges) {
        Some(ranges) => ranges,
        None => block_ranges(),
    };

    let existing = match category {
        Some(category) => distinct_codes(records.iter().filter(|c| c.category() == category)),
        None => distinct_codes(records),
    };

    find_range_gaps(&existing, ranges)
}

/// пропуски по списку диапазонов, в порядке списка
///
/// диапазон попадает в результат, только если в нём есть и присутствующие, и отсутствующие кодпоинты:
/// совсем пустой диапазон считается "ещё не начатым"
pub fn find_range_gaps(existing: &BTreeSet<u32>, ranges: &[CodeRange]) -> Vec<GapEntry>
{
    ranges
        .iter()
        .filter(|range| existing.range(range.codes()).next().is_some())
        .filter_map(|range| {
            let mut missing = range
                .codes()
                .filter(|code| !existing.contains(code) && is_plausible_gap(*code));

            let sample_missing: Vec<u32> = missing.by_ref().take(SAMPLE_LIMIT).collect();

            if sample_missing.is_empty() {
                return None;
            }

            Some(GapEntry {
                range: *range,
                missing_count: sample_missing.len() + missing.count(),
                sample_missing,
            })
        })
        .collect()
}
