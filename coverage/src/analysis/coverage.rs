use serde::Serialize;

use super::distinct_codes;
use crate::record::ResolvedCharacter;
use crate::tables::{CodeRange, UnicodeBlock};

/// покрытие блока Unicode каталогом
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageEntry
{
    /// название блока
    pub block: String,
    pub range: CodeRange,
    /// размер блока
    pub total: u32,
    /// количество различных кодпоинтов каталога внутри блока
    pub covered: u32,
    /// процент покрытия, один знак после запятой
    pub percentage: f64,
}

/// покрытие блоков каталогом, по убыванию покрытия
///
/// считаются различные кодпоинты, а не записи. блоки без единого кодпоинта в результат не попадают,
/// при равном покрытии сохраняется порядок таблицы блоков
pub fn analyze_coverage(records: &[ResolvedCharacter], blocks: &[UnicodeBlock]) -> Vec<CoverageEntry>
{
    let codes = distinct_codes(records);

    let mut coverage: Vec<CoverageEntry> = blocks
        .iter()
        .filter_map(|block| {
            let covered = codes.range(block.range.codes()).count() as u32;

            if covered == 0 {
                return None;
            }

            let total = block.range.len();

            Some(CoverageEntry {
                block: block.name.to_owned(),
                range: block.range,
                total,
                covered,
                percentage: percentage(covered, total),
            })
        })
        .collect();

    coverage.sort_by(|a, b| b.covered.cmp(&a.covered));

    coverage
}

/// covered / total * 100 с округлением до десятых, половина округляется вверх
///
/// округление выполняется в целых числах над точной дробью
pub fn percentage(covered: u32, total: u32) -> f64
{
    if total == 0 {
        return 0.0;
    }

    let covered = covered as u64;
    let total = total as u64;

    let tenths = (covered * 2000 + total) / (total * 2);

    tenths as f64 / 10.0
}
