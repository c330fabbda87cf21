use unicode_coverage::{CharacterRecord, ResolvedCharacter, CATEGORY_RANGES};

/// синтетический каталог: каждый step-й кодпоинт каждого диапазона таблицы категорий
///
/// плюс записи без кодпоинта и с составными кодпоинтами, как в настоящем каталоге
pub fn synthetic_catalog(step: u32) -> Vec<ResolvedCharacter>
{
    let mut records = vec![];

    for category in CATEGORY_RANGES {
        for range in category.ranges {
            for code in range.codes().step_by(step.max(1) as usize) {
                let character = char::from_u32(code).map(String::from).unwrap_or_default();
                let codepoint = format!("U+{:04X}", code);

                records.push(CharacterRecord::new(character, codepoint, Some(category.name)));
            }
        }
    }

    records.push(CharacterRecord::new("🇰🇷", "U+1F1F0 U+1F1F7", Some("flag")));
    records.push(CharacterRecord::new("?", "", None));

    records.into_iter().map(ResolvedCharacter::new).collect()
}

/// наборы данных для бенчмарков: от плотного каталога к разреженному
pub fn catalogs() -> Vec<(String, Vec<ResolvedCharacter>)>
{
    [1, 4, 16]
        .into_iter()
        .map(|step| (format!("step_{}", step), synthetic_catalog(step)))
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn dense_catalog_covers_every_range()
    {
        let records = synthetic_catalog(1);
        let expected: u32 = CATEGORY_RANGES
            .iter()
            .flat_map(|c| c.ranges.iter())
            .map(|r| r.len())
            .sum();

        assert_eq!(records.len(), expected as usize + 2);
        assert_eq!(records.iter().filter(|c| !c.is_resolved()).count(), 1);
    }

    #[test]
    fn sparse_catalog_is_smaller()
    {
        assert!(synthetic_catalog(16).len() < synthetic_catalog(4).len());
        assert_eq!(catalogs().len(), 3);
    }
}
