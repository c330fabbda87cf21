use proptest::prelude::*;

use unicode_coverage::analysis::{analyze_coverage, find_gaps, summarize_categories};
use unicode_coverage::{CharacterRecord, ResolvedCharacter, CATEGORY_RANGES, UNICODE_BLOCKS};

/// кодпоинты из нескольких блоков таблицы, иногда - мусор
fn arb_codepoint() -> impl Strategy<Value = String>
{
    prop_oneof![
        (0x2190u32 ..= 0x21FF).prop_map(|code| format!("U+{:04X}", code)),
        (0x2600u32 ..= 0x26FF).prop_map(|code| format!("U+{:04X}", code)),
        (0x1F600u32 ..= 0x1F64F).prop_map(|code| format!("U+{:04X}", code)),
        (0x0020u32 ..= 0x007E).prop_map(|code| format!("U+{:04X}", code)),
        Just(String::new()),
        "[a-z]{1,6}",
    ]
}

fn arb_category() -> impl Strategy<Value = Option<String>>
{
    prop_oneof![
        Just(None),
        Just(Some("arrow".to_owned())),
        Just(Some("emoji".to_owned())),
        Just(Some("weather".to_owned())),
        "[a-z]{3,8}".prop_map(Some),
    ]
}

fn arb_records() -> impl Strategy<Value = Vec<ResolvedCharacter>>
{
    prop::collection::vec((arb_codepoint(), arb_category()), 0 .. 60).prop_map(|items| {
        items
            .into_iter()
            .map(|(code, category)| {
                ResolvedCharacter::new(CharacterRecord::new("x", code, category.as_deref()))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_every_record_in_one_group(records in arb_records()) {
        let summary = summarize_categories(&records);
        let counted: usize = summary.iter().map(|s| s.count).sum();

        prop_assert_eq!(counted, records.len());
        prop_assert!(summary.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn prop_coverage_is_bounded(records in arb_records()) {
        for entry in analyze_coverage(&records, UNICODE_BLOCKS) {
            prop_assert!(entry.covered > 0);
            prop_assert!(entry.covered <= entry.total);
            prop_assert!(entry.percentage > 0.0 && entry.percentage <= 100.0);
        }
    }

    #[test]
    fn prop_gaps_have_present_and_missing_points(records in arb_records()) {
        for category in CATEGORY_RANGES.iter().map(|c| Some(c.name)).chain([None]) {
            for gap in find_gaps(&records, category) {
                prop_assert!(gap.missing_count > 0);
                prop_assert!((gap.missing_count as u32) < gap.range.len());
                prop_assert!(gap.sample_missing.len() <= 5);
                prop_assert!(gap.sample_missing.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(gap.sample_missing.iter().all(|code| gap.range.contains(*code)));

                let present = records
                    .iter()
                    .filter(|c| category.map_or(true, |name| c.category() == name))
                    .any(|c| c.is_resolved() && gap.range.contains(c.code));
                prop_assert!(present);
            }
        }
    }
}
