mod blocks;
mod categories;

pub use blocks::UNICODE_BLOCKS;
pub use categories::CATEGORY_RANGES;

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::codepoint::format_range;

/// диапазон кодпоинтов, границы включаются
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange
{
    pub start: u32,
    pub end: u32,
}

impl CodeRange
{
    pub const fn new(start: u32, end: u32) -> Self
    {
        Self { start, end }
    }

    /// количество кодпоинтов в диапазоне
    #[inline]
    pub fn len(&self) -> u32
    {
        self.end - self.start + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.end < self.start
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.start <= code && code <= self.end
    }

    /// подпись диапазона для отчётов
    pub fn label(&self) -> String
    {
        format_range(self.start, self.end)
    }

    pub fn codes(&self) -> std::ops::RangeInclusive<u32>
    {
        self.start ..= self.end
    }
}

impl Serialize for CodeRange
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.label())
    }
}

/// именованный блок Unicode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeBlock
{
    pub name: &'static str,
    pub range: CodeRange,
}

/// ожидаемые диапазоны смысловой категории каталога
/// это эвристика для поиска пропусков, а не правило валидации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRanges
{
    pub name: &'static str,
    pub ranges: &'static [CodeRange],
}

lazy_static! {
    /// индекс таблицы категорий по названию
    static ref CATEGORY_INDEX: HashMap<&'static str, &'static [CodeRange]> = CATEGORY_RANGES
        .iter()
        .map(|category| (category.name, category.ranges))
        .collect();

    /// диапазоны всех блоков, в порядке таблицы
    static ref BLOCK_RANGES: Vec<CodeRange> = UNICODE_BLOCKS.iter().map(|block| block.range).collect();
}

/// диапазоны категории, если она есть в таблице
pub fn category_ranges(name: &str) -> Option<&'static [CodeRange]>
{
    CATEGORY_INDEX.get(name).copied()
}

/// диапазоны блоков Unicode
pub fn block_ranges() -> &'static [CodeRange]
{
    BLOCK_RANGES.as_slice()
}

/// названия категорий таблицы в алфавитном порядке
pub fn category_names() -> Vec<&'static str>
{
    let mut names: Vec<&'static str> = CATEGORY_RANGES.iter().map(|c| c.name).collect();
    names.sort_unstable();

    names
}
