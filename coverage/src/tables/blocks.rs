use super::{CodeRange, UnicodeBlock};

macro_rules! blocks {
    ($(($name: expr, $start: expr, $end: expr)),+ $(,)?) => {
        &[$(UnicodeBlock { name: $name, range: CodeRange::new($start, $end) }),+]
    };
}

/// основные блоки Unicode, по которым считается покрытие
/// порядок таблицы важен: при равном покрытии блоки выводятся в этом порядке
pub const UNICODE_BLOCKS: &[UnicodeBlock] = blocks![
    ("Basic Latin", 0x0000, 0x007F),
    ("Latin-1 Supplement", 0x0080, 0x00FF),
    ("General Punctuation", 0x2000, 0x206F),
    ("Superscripts and Subscripts", 0x2070, 0x209F),
    ("Currency Symbols", 0x20A0, 0x20CF),
    ("Letterlike Symbols", 0x2100, 0x214F),
    ("Number Forms", 0x2150, 0x218F),
    ("Arrows", 0x2190, 0x21FF),
    ("Mathematical Operators", 0x2200, 0x22FF),
    ("Miscellaneous Technical", 0x2300, 0x23FF),
    ("Enclosed Alphanumerics", 0x2460, 0x24FF),
    ("Box Drawing", 0x2500, 0x257F),
    ("Block Elements", 0x2580, 0x259F),
    ("Geometric Shapes", 0x25A0, 0x25FF),
    ("Miscellaneous Symbols", 0x2600, 0x26FF),
    ("Dingbats", 0x2700, 0x27BF),
    ("Supplemental Arrows-A", 0x27F0, 0x27FF),
    ("Supplemental Arrows-B", 0x2900, 0x297F),
    ("Miscellaneous Symbols and Arrows", 0x2B00, 0x2BFF),
    ("Greek and Coptic", 0x0370, 0x03FF),
    ("Emoticons", 0x1F600, 0x1F64F),
    ("Miscellaneous Symbols and Pictographs", 0x1F300, 0x1F5FF),
    ("Transport and Map Symbols", 0x1F680, 0x1F6FF),
    ("Supplemental Symbols and Pictographs", 0x1F900, 0x1F9FF),
    ("Symbols and Pictographs Extended-A", 0x1FA00, 0x1FA6F),
    ("Regional Indicator Symbols", 0x1F1E0, 0x1F1FF),
];
