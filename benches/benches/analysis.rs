use criterion::{criterion_group, criterion_main, Criterion};
use unicode_coverage::analysis::{analyze_coverage, find_gaps, summarize_categories};
use unicode_coverage::{ResolvedCharacter, UNICODE_BLOCKS};

mod group;

group!(
    coverage,
    test_coverage,
    "coverage",
    "blocks",
    |records: &[ResolvedCharacter]| analyze_coverage(records, UNICODE_BLOCKS).len()
);

group!(
    categories,
    test_categories,
    "categories",
    "summary",
    |records: &[ResolvedCharacter]| summarize_categories(records).len()
);

group!(
    gaps_all,
    test_gaps_all,
    "gaps",
    "blocks",
    |records: &[ResolvedCharacter]| find_gaps(records, None).len()
);

group!(
    gaps_emoji,
    test_gaps_emoji,
    "gaps",
    "emoji",
    |records: &[ResolvedCharacter]| find_gaps(records, Some("emoji")).len()
);

criterion_group!(benches, coverage, categories, gaps_all, gaps_emoji);
criterion_main!(benches);
