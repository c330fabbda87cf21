use super::{CategoryRanges, CodeRange};

macro_rules! categories {
    ($($name: expr => [$(($start: expr, $end: expr)),+ $(,)?]),+ $(,)?) => {
        &[$(CategoryRanges { name: $name, ranges: &[$(CodeRange::new($start, $end)),+] }),+]
    };
}

/// ожидаемые диапазоны кодпоинтов по категориям каталога
pub const CATEGORY_RANGES: &[CategoryRanges] = categories![
    "arrow" => [(0x2190, 0x21FF), (0x27F0, 0x27FF), (0x2900, 0x297F)],
    "math" => [(0x2200, 0x22FF), (0x2A00, 0x2AFF)],
    "greek" => [(0x0370, 0x03FF)],
    "line" => [(0x2500, 0x257F), (0x2580, 0x259F)],
    "geometric" => [(0x25A0, 0x25FF), (0x2B00, 0x2B4F)],
    "circled" => [(0x2460, 0x24FF), (0x3200, 0x32FF)],
    "superscript" => [(0x2070, 0x209F)],
    "currency" => [(0x20A0, 0x20CF)],
    "punctuation" => [(0x2000, 0x206F)],
    "music" => [(0x2669, 0x266F), (0x1F3B5, 0x1F3BC)],
    "emoji" => [(0x1F600, 0x1F64F), (0x1F300, 0x1F5FF), (0x1F680, 0x1F6FF)],
    "animal" => [(0x1F400, 0x1F43F), (0x1F980, 0x1F9AF)],
    "food" => [(0x1F345, 0x1F37F), (0x1F950, 0x1F96F)],
    "flag" => [(0x1F1E0, 0x1F1FF), (0x1F3C1, 0x1F3F4)],
    "star" => [(0x2721, 0x2739), (0x2605, 0x2606)],
    "heart" => [(0x2661, 0x2665), (0x2763, 0x2765), (0x1F493, 0x1F49F)],
    "weather" => [(0x2600, 0x2602), (0x2614, 0x2614), (0x26C4, 0x26C8), (0x1F300, 0x1F32D)],
    "check" => [(0x2610, 0x2612), (0x2713, 0x2718), (0x2705, 0x2705)],
    "zodiac" => [(0x2648, 0x2653)],
    "roman" => [(0x2160, 0x216F), (0x2170, 0x217F)],
    "hand" => [(0x261A, 0x261F), (0x1F446, 0x1F450), (0x1F91A, 0x1F91F)],
    "face" => [(0x1F600, 0x1F64F)],
    "object" => [(0x1F451, 0x1F4FF), (0x1F6A0, 0x1F6FF)],
    "game" => [(0x2654, 0x265F), (0x2660, 0x2667), (0x1F0A0, 0x1F0FF)],
    "bracket" => [(0x0028, 0x0029), (0x005B, 0x005D), (0x007B, 0x007D), (0x2768, 0x2775), (0x27E6, 0x27EF)],
];
