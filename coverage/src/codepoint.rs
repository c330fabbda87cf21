/// префикс кодпоинта в записях каталога
pub const CODE_PREFIX: &str = "U+";

/// значение, означающее "кодпоинт не удалось разобрать"
/// такие записи не участвуют в подсчётах по диапазонам
pub const UNRESOLVED: u32 = 0;

/// первый кодпоинт из поля записи каталога
///
/// поле может содержать последовательность вида "U+1F1F0 U+1F1F7" (флаги, составные символы),
/// берётся только первый токен. пустое или некорректное поле даёт [`UNRESOLVED`]
pub fn resolve(field: &str) -> u32
{
    match field.split_whitespace().next() {
        Some(token) => parse_token(token).unwrap_or(UNRESOLVED),
        None => UNRESOLVED,
    }
}

/// вся последовательность кодпоинтов поля
/// разбор останавливается на первом некорректном токене
pub fn resolve_sequence(field: &str) -> Vec<u32>
{
    field
        .split_whitespace()
        .map_while(parse_token)
        .collect()
}

/// токен вида U+XXXX
fn parse_token(token: &str) -> Option<u32>
{
    let digits = token.strip_prefix(CODE_PREFIX).unwrap_or(token);

    u32::from_str_radix(digits, 16).ok()
}

/// кодпоинт в текстовом виде: U+0041, U+1F600
pub fn format_code(code: u32) -> String
{
    format!("{}{:04X}", CODE_PREFIX, code)
}

/// диапазон в текстовом виде: U+2190-U+21FF
pub fn format_range(start: u32, end: u32) -> String
{
    format!("{}-{}", format_code(start), format_code(end))
}

/// сериализация списка кодпоинтов в виде ["U+2190", "U+2191"]
pub fn serialize_codes<S>(codes: &[u32], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(codes.iter().map(|&code| format_code(code)))
}

#[cfg(test)]
mod tests
{
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_token_only()
    {
        assert_eq!(resolve("U+1F600 U+1F1F7"), 0x1F600);
        assert_eq!(resolve("  U+2192  "), 0x2192);
    }

    #[test]
    fn unparsable_is_unresolved()
    {
        assert_eq!(resolve(""), UNRESOLVED);
        assert_eq!(resolve("   "), UNRESOLVED);
        assert_eq!(resolve("not-hex"), UNRESOLVED);
        assert_eq!(resolve("U+"), UNRESOLVED);
        assert_eq!(resolve("U+XYZ"), UNRESOLVED);
        assert_eq!(resolve("U+FFFFFFFFFF"), UNRESOLVED);
    }

    #[test]
    fn bare_hex_is_accepted()
    {
        assert_eq!(resolve("2605"), 0x2605);
    }

    #[test]
    fn sequence()
    {
        assert_eq!(resolve_sequence("U+1F1F0 U+1F1F7"), vec![0x1F1F0, 0x1F1F7]);
        assert_eq!(resolve_sequence("U+0031 U+FE0F U+20E3"), vec![0x31, 0xFE0F, 0x20E3]);
        assert_eq!(resolve_sequence("U+0041 junk U+0042"), vec![0x41]);
        assert!(resolve_sequence("").is_empty());
    }

    #[test]
    fn formatting()
    {
        assert_eq!(format_code(0x41), "U+0041");
        assert_eq!(format_code(0x1F600), "U+1F600");
        assert_eq!(format_range(0x2190, 0x21FF), "U+2190-U+21FF");
    }

    proptest! {
        #[test]
        fn prop_resolve_round_trips(code in any::<u32>()) {
            prop_assert_eq!(resolve(&format!("U+{:X}", code)), code);
            prop_assert_eq!(resolve(&format_code(code)), code);
        }

        #[test]
        fn prop_resolve_never_panics(field in "\\PC{0,16}") {
            let _ = resolve(&field);
        }
    }
}
