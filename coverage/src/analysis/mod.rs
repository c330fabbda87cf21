mod categories;
mod coverage;
mod gaps;

pub use categories::group_by_category;
pub use categories::summarize_categories;
pub use categories::CategoryGroup;
pub use categories::CategorySummaryEntry;

pub use coverage::analyze_coverage;
pub use coverage::percentage;
pub use coverage::CoverageEntry;

pub use gaps::find_gaps;
pub use gaps::find_range_gaps;
pub use gaps::GapEntry;
pub use gaps::SAMPLE_LIMIT;

use std::collections::BTreeSet;

use crate::record::ResolvedCharacter;

/// множество различных разобранных кодпоинтов записей, без нуля
pub fn distinct_codes<'a, I>(records: I) -> BTreeSet<u32>
where
    I: IntoIterator<Item = &'a ResolvedCharacter>,
{
    records
        .into_iter()
        .filter(|c| c.is_resolved())
        .map(|c| c.code)
        .collect()
}
